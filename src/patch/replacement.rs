/// Updated `create_order`: resolves product names before persisting the
/// order so the stored `products` JSON carries `name` for each line.
///
/// Inserted verbatim. The `$order_id` style tokens are Cypher parameters and
/// must not be expanded as capture-group references.
pub const CREATE_ORDER_REPLACEMENT: &str = r#"def create_order(self, order_input: CreateOrderInput) -> OrderModel:
        """Crear un nuevo pedido"""
        order_id = str(uuid.uuid4())
        now = datetime.now()
        
        # Obtener nombres de productos
        products_with_names = []
        for product_input in order_input.products:
            product = self.get_product(product_input.id)
            if product:
                products_with_names.append({
                    "id": product_input.id,
                    "name": product.name,
                    "quantity": product_input.quantity,
                    "price": product_input.price
                })
            else:
                # Fallback si no se encuentra el producto
                products_with_names.append({
                    "id": product_input.id,
                    "name": f"Producto {product_input.id}",
                    "quantity": product_input.quantity,
                    "price": product_input.price
                })
        
        query = """
        CREATE (o:Order {
            id: $order_id,
            restaurant_id: $restaurant_id,
            customer_name: $customer_name,
            customer_phone: $customer_phone,
            customer_email: $customer_email,
            products: $products,
            total: $total,
            payment_method: $payment_method,
            delivery_method: $delivery_method,
            mesa: $mesa,
            delivery_address: $delivery_address,
            status: 'pending',
            created_at: $created_at,
            updated_at: $created_at
        })
        RETURN o
        """
        
        with self.db.get_session() as session:
            result = session.run(query, {
                "order_id": order_id,
                "restaurant_id": order_input.restaurant_id,
                "customer_name": order_input.customer_name,
                "customer_phone": order_input.customer_phone,
                "customer_email": order_input.customer_email,
                "products": json.dumps(products_with_names),
                "total": order_input.total,
                "payment_method": order_input.payment_method,
                "delivery_method": order_input.delivery_method,
                "mesa": order_input.mesa,
                "delivery_address": order_input.delivery_address,
                "created_at": now.isoformat()
            })
            
            record = result.single()
            if record:
                return self._record_to_order(record)
                
        raise Exception("Error creando pedido")"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replacement_shape() {
        assert!(CREATE_ORDER_REPLACEMENT.starts_with("def create_order(self, order_input: CreateOrderInput) -> OrderModel:\n"));
        assert!(CREATE_ORDER_REPLACEMENT.ends_with(r#"raise Exception("Error creando pedido")"#));
        assert!(CREATE_ORDER_REPLACEMENT.contains(r#""products": json.dumps(products_with_names),"#));
        assert!(CREATE_ORDER_REPLACEMENT.contains("id: $order_id,"));
    }
}
