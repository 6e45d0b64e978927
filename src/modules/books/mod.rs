pub mod collection;
pub mod models;
pub mod routes;

use async_trait::async_trait;
use axum::Router;
use bookshelf_kernel::{InitCtx, Module};
use serde_json::json;

use routes::SharedBooks;

/// Books module: the in-memory collection and its CRUD routes
pub struct BooksModule {
    books: SharedBooks,
}

impl BooksModule {
    pub fn new() -> Self {
        Self {
            books: SharedBooks::default(),
        }
    }

    /// Handle to the collection served by this module
    pub fn books(&self) -> SharedBooks {
        self.books.clone()
    }
}

impl Default for BooksModule {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.books.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        let book_id_param = json!({
            "name": "bookId",
            "in": "path",
            "required": true,
            "schema": { "type": "string" }
        });
        let fail = |description: &str| {
            json!({
                "description": description,
                "content": {
                    "application/json": {
                        "schema": { "$ref": "#/components/schemas/FailResponse" }
                    }
                }
            })
        };
        let payload_body = json!({
            "required": true,
            "content": {
                "application/json": {
                    "schema": { "$ref": "#/components/schemas/BookPayload" }
                }
            }
        });
        let message_only = |description: &str| {
            json!({
                "description": description,
                "content": {
                    "application/json": {
                        "schema": {
                            "type": "object",
                            "properties": {
                                "status": { "type": "string" },
                                "message": { "type": "string" }
                            }
                        }
                    }
                }
            })
        };

        Some(json!({
            "paths": {
                "/books": {
                    "post": {
                        "summary": "Add a book",
                        "tags": ["Books"],
                        "requestBody": payload_body.clone(),
                        "responses": {
                            "201": {
                                "description": "Book added",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "object",
                                            "properties": {
                                                "status": { "type": "string" },
                                                "message": { "type": "string" },
                                                "data": {
                                                    "type": "object",
                                                    "properties": {
                                                        "bookId": { "type": "string" }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            },
                            "400": fail("Missing name, readPage greater than pageCount, or malformed body")
                        }
                    },
                    "get": {
                        "summary": "List books",
                        "tags": ["Books"],
                        "responses": {
                            "200": {
                                "description": "Every book projected to id, name and publisher",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "object",
                                            "properties": {
                                                "status": { "type": "string" },
                                                "data": {
                                                    "type": "object",
                                                    "properties": {
                                                        "books": {
                                                            "type": "array",
                                                            "items": { "$ref": "#/components/schemas/BookSummary" }
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                "/books/{bookId}": {
                    "get": {
                        "summary": "Get a book",
                        "tags": ["Books"],
                        "parameters": [book_id_param.clone()],
                        "responses": {
                            "200": {
                                "description": "The full book record",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "object",
                                            "properties": {
                                                "status": { "type": "string" },
                                                "data": {
                                                    "type": "object",
                                                    "properties": {
                                                        "book": { "$ref": "#/components/schemas/Book" }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            },
                            "404": fail("Book not found")
                        }
                    },
                    "put": {
                        "summary": "Replace a book",
                        "tags": ["Books"],
                        "parameters": [book_id_param.clone()],
                        "requestBody": payload_body,
                        "responses": {
                            "200": message_only("Book updated"),
                            "400": fail("Missing name, readPage greater than pageCount, or malformed body"),
                            "404": fail("Id not found")
                        }
                    },
                    "delete": {
                        "summary": "Delete a book",
                        "tags": ["Books"],
                        "parameters": [book_id_param],
                        "responses": {
                            "200": message_only("Book deleted"),
                            "404": fail("Id not found")
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Book": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string" },
                            "name": { "type": "string" },
                            "year": { "type": ["integer", "null"] },
                            "author": { "type": ["string", "null"] },
                            "summary": { "type": ["string", "null"] },
                            "publisher": { "type": ["string", "null"] },
                            "pageCount": { "type": "integer", "minimum": 0 },
                            "readPage": { "type": "integer", "minimum": 0 },
                            "reading": { "type": "boolean" },
                            "finished": {
                                "type": "boolean",
                                "description": "pageCount equals readPage"
                            },
                            "insertedAt": { "type": "string", "format": "date-time" },
                            "updatedAt": { "type": "string", "format": "date-time" }
                        },
                        "required": [
                            "id", "name", "pageCount", "readPage", "reading",
                            "finished", "insertedAt", "updatedAt"
                        ]
                    },
                    "BookPayload": {
                        "type": "object",
                        "properties": {
                            "name": { "type": "string" },
                            "year": { "type": "integer" },
                            "author": { "type": "string" },
                            "summary": { "type": "string" },
                            "publisher": { "type": "string" },
                            "pageCount": { "type": "integer", "minimum": 0 },
                            "readPage": {
                                "type": "integer",
                                "minimum": 0,
                                "description": "Must not exceed pageCount"
                            },
                            "reading": { "type": "boolean" }
                        },
                        "required": ["name"]
                    },
                    "BookSummary": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string" },
                            "name": { "type": "string" },
                            "publisher": { "type": ["string", "null"] }
                        },
                        "required": ["id", "name"]
                    }
                }
            }
        }))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        let discarded = self.books.read().await.len();
        tracing::info!(
            module = self.name(),
            discarded,
            "books module stopped, in-memory records dropped"
        );
        Ok(())
    }
}

/// Create a new instance of the books module
pub fn create_module() -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(BooksModule::new())
}
