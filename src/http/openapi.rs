//! OpenAPI 3 description of the catalog routes, served at `GET /openapi.json`.

use axum::Json;
use serde_json::{json, Value};

pub const OPENAPI_PATH: &str = "/openapi.json";

fn error_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": {"application/json": {"schema": {"$ref": "#/components/schemas/Error"}}}
    })
}

fn json_response(description: &str, schema: &str) -> Value {
    json!({
        "description": description,
        "content": {"application/json": {"schema": {"$ref": format!("#/components/schemas/{schema}")}}}
    })
}

fn payload_body() -> Value {
    json!({
        "required": true,
        "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ProductPayload"}}}
    })
}

/// The document served by [`openapi_handler`].
#[must_use]
pub fn openapi_document() -> Value {
    let id_param = json!({
        "name": "id",
        "in": "path",
        "required": true,
        "schema": {"type": "integer", "format": "uint64", "minimum": 0}
    });

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Product Catalog",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/products": {
                "get": {
                    "operationId": "listProducts",
                    "responses": {
                        "200": json_response("All products", "ProductList"),
                        "500": error_response("Storage failure")
                    }
                },
                "post": {
                    "operationId": "createProduct",
                    "requestBody": payload_body(),
                    "responses": {
                        "201": json_response("Created product", "Product"),
                        "400": error_response("Invalid payload or duplicate id")
                    }
                }
            },
            "/products/{id}": {
                "parameters": [id_param],
                "get": {
                    "operationId": "getProduct",
                    "responses": {
                        "200": json_response("The product", "Product"),
                        "404": error_response("No product with this id")
                    }
                },
                "put": {
                    "operationId": "updateProduct",
                    "requestBody": payload_body(),
                    "responses": {
                        "200": json_response("Updated product", "Product"),
                        "400": error_response("Invalid payload"),
                        "404": error_response("No product with this id")
                    }
                },
                "delete": {
                    "operationId": "deleteProduct",
                    "responses": {
                        "204": {"description": "Deleted"},
                        "404": error_response("No product with this id")
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Product": {
                    "type": "object",
                    "required": ["id", "name", "price"],
                    "properties": {
                        "id": {"type": "integer", "format": "uint64"},
                        "name": {"type": "string", "minLength": 1},
                        "price": {"type": "integer", "format": "int64"}
                    }
                },
                "ProductPayload": {
                    "type": "object",
                    "properties": {
                        "id": {"type": "integer", "format": "uint64", "description": "Honoured on create only"},
                        "name": {"type": "string", "minLength": 1},
                        "price": {"type": "integer", "format": "int64", "description": "Must not be zero"}
                    }
                },
                "ProductList": {
                    "type": "object",
                    "required": ["products", "count"],
                    "properties": {
                        "products": {"type": "array", "items": {"$ref": "#/components/schemas/Product"}},
                        "count": {"type": "integer", "minimum": 0}
                    }
                },
                "Error": {
                    "type": "object",
                    "required": ["error"],
                    "properties": {"error": {"type": "string"}}
                }
            }
        }
    })
}

pub async fn openapi_handler() -> Json<Value> {
    Json(openapi_document())
}
