use once_cell::sync::Lazy;
use regex::Regex;

/// Literal pieces of the original `create_order` definition, in order.
///
/// Any run of whitespace (including none) may separate two pieces, which keeps
/// the match independent of indentation and blank lines. Spaces inside a piece
/// are matched as-is.
pub const CREATE_ORDER_SEGMENTS: &[&str] = &[
    "def create_order(self, order_input: CreateOrderInput) -> OrderModel:",
    r#""""Crear un nuevo pedido""""#,
    "order_id = str(uuid.uuid4())",
    "now = datetime.now()",
    r#"query = """"#,
    "CREATE (o:Order {",
    "id: $order_id,",
    "restaurant_id: $restaurant_id,",
    "customer_name: $customer_name,",
    "customer_phone: $customer_phone,",
    "customer_email: $customer_email,",
    "products: $products,",
    "total: $total,",
    "payment_method: $payment_method,",
    "delivery_method: $delivery_method,",
    "mesa: $mesa,",
    "delivery_address: $delivery_address,",
    "status: 'pending',",
    "created_at: $created_at,",
    "updated_at: $created_at",
    "}",
    ")",
    "RETURN o",
    r#"""""#,
    "with self.db.get_session() as session:",
    "result = session.run(query, {",
    r#""order_id": order_id,"#,
    r#""restaurant_id": order_input.restaurant_id,"#,
    r#""customer_name": order_input.customer_name,"#,
    r#""customer_phone": order_input.customer_phone,"#,
    r#""customer_email": order_input.customer_email,"#,
    r#""products": json.dumps([vars(p) for p in order_input.products]),"#,
    r#""total": order_input.total,"#,
    r#""payment_method": order_input.payment_method,"#,
    r#""delivery_method": order_input.delivery_method,"#,
    r#""mesa": order_input.mesa,"#,
    r#""delivery_address": order_input.delivery_address,"#,
    r#""created_at": now.isoformat()"#,
    "})",
    "record = result.single()",
    "if record:",
    "return self._record_to_order(record)",
    r#"raise Exception("Error creando pedido")"#,
];

/// Compiled matcher for the original `create_order` method
pub static CREATE_ORDER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // Escaped literals always compile.
    compile_segments(CREATE_ORDER_SEGMENTS).expect("create_order segments compile")
});

/// Build a regex matching `segments` literally, separated by optional whitespace
pub fn compile_segments(segments: &[&str]) -> Result<Regex, regex::Error> {
    let source = segments
        .iter()
        .map(|segment| regex::escape(segment))
        .collect::<Vec<_>>()
        .join(r"\s*");
    Regex::new(&source)
}
