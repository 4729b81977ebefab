use serde_json::{json, Value};

/// A catalog written with the original editor's keys: one template with an
/// element in every zone plus a zoneless decoration.
pub fn sale_catalog() -> Value {
    json!([
        {
            "id": "summer-sale",
            "nombre": "Summer Sale",
            "formatos": ["1080x1080", "1920x1080", "1080x1920", "270x270"],
            "thumbnail": "thumbs/summer-sale.png",
            "elementos": [
                { "id": "headline", "tipo": "texto", "zona": "oferta", "contenido": "-50%", "tam": 96, "color": "#FFD700" },
                { "id": "bg", "tipo": "imagen", "zona": "fondo", "src": "assets/beach.jpg", "tam": [1080, 1080], "pos": [0, 0] },
                { "id": "product", "tipo": "imagen", "zona": "producto", "src": "assets/sandals.png", "tam": [432, 432], "pos": [324, 324] },
                { "id": "logo", "tipo": "logo", "zona": "marca", "src": "assets/logo.svg" },
                { "id": "cta", "tipo": "texto", "zona": "cta", "contenido": "Shop now", "tam": 48 },
                { "id": "sparkle", "tipo": "imagen", "src": "assets/sparkle.png", "tam": [50, 50], "pos": [100, 200] }
            ]
        },
        {
            "id": "minimal",
            "name": "Minimal",
            "formats": ["1200x628"],
            "elements": [
                { "id": "title", "kind": "text", "content": "Hello", "size": 40, "position": [540, 100] }
            ]
        }
    ])
}

pub fn template_with_elements(id: &str, formats: &[&str], elements: Value) -> Value {
    json!([{ "id": id, "name": id, "formats": formats, "elements": elements }])
}
