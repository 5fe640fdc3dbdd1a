use oas_ts_gen::generate_interfaces;
use pretty_assertions::assert_eq;

const PETSTORE_JSON: &str = r##"{
  "openapi": "3.0.0",
  "info": { "title": "Petstore", "version": "1.0.0" },
  "components": {
    "schemas": {
      "Pet": {
        "description": "A pet in the store",
        "type": "object",
        "required": ["id", "name"],
        "properties": {
          "id": { "type": "integer", "format": "int64" },
          "name": { "type": "string", "description": "Display name" },
          "tag": { "type": "string" },
          "status": { "enum": ["available", "pending", 404] }
        }
      },
      "Pets": {
        "type": "array",
        "items": { "$ref": "#/components/schemas/Pet" }
      }
    }
  },
  "paths": {
    "/pets": {
      "post": {
        "requestBody": {
          "content": {
            "application/json": {
              "schema": {
                "type": "object",
                "required": ["name"],
                "properties": {
                  "name": { "type": "string" },
                  "tag": { "type": "string" }
                }
              }
            }
          }
        }
      }
    }
  }
}"##;

const PETSTORE_YAML: &str = "openapi: 3.0.0
info:
  title: Petstore
  version: 1.0.0
components:
  schemas:
    Pet:
      description: A pet in the store
      type: object
      required:
        - id
        - name
      properties:
        id:
          type: integer
          format: int64
        name:
          type: string
          description: Display name
        tag:
          type: string
        status:
          enum:
            - available
            - pending
            - 404
    Pets:
      type: array
      items:
        $ref: '#/components/schemas/Pet'
paths:
  /pets:
    post:
      requestBody:
        content:
          application/json:
            schema:
              type: object
              required:
                - name
              properties:
                name:
                  type: string
                tag:
                  type: string
";

const EXPECTED: &str = "/**
 * A pet in the store
 */
export interface Pet {
  id: number;
  /**
   * Display name
   */
  name: string;
  tag?: string;
  status?: 'available' | 'pending' | 404;
}

export interface Pets {
}

export interface PetsParams {
  name: string;
  tag?: string;
}
";

#[test]
fn test_json_document_converts_end_to_end() {
  assert_eq!(generate_interfaces(PETSTORE_JSON), EXPECTED);
}

#[test]
fn test_yaml_document_produces_identical_output() {
  assert_eq!(generate_interfaces(PETSTORE_YAML), EXPECTED);
}

#[test]
fn test_conversion_is_idempotent() {
  assert_eq!(generate_interfaces(PETSTORE_JSON), generate_interfaces(PETSTORE_JSON));
}

#[test]
fn test_swagger_definitions_document_converts() {
  let input = r#"{
    "swagger": "2.0",
    "definitions": {
      "Error": {
        "type": "object",
        "required": ["code"],
        "properties": {
          "code": { "type": "integer" },
          "message": { "type": "string" }
        }
      }
    }
  }"#;

  assert_eq!(
    generate_interfaces(input),
    "export interface Error {\n  code: number;\n  message?: string;\n}\n"
  );
}

#[test]
fn test_failures_come_back_as_comment_lines() {
  assert_eq!(
    generate_interfaces("{}"),
    "// Error: No schemas found in components/schemas, definitions, or inline in paths."
  );
  assert_eq!(
    generate_interfaces("not: [valid"),
    "// Error: Invalid input: Content is not valid JSON or YAML."
  );
}
