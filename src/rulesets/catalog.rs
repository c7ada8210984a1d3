//! Built-in OpenAPI rules

use crate::model::{
    Rule, RuleAction, RuleType, Severity, CATEGORY_DESCRIPTIONS, CATEGORY_EXAMPLES,
    CATEGORY_INFO, CATEGORY_OPERATIONS, CATEGORY_SCHEMAS, CATEGORY_SECURITY, CATEGORY_TAGS,
    CATEGORY_VALIDATION,
};

use RuleType::{Style, Validation};
use Severity::{Error, Info, Warn};

struct Def {
    id: &'static str,
    category: &'static str,
    severity: Severity,
    recommended: bool,
    rule_type: RuleType,
    given: &'static str,
    field: Option<&'static str>,
    function: &'static str,
    description: &'static str,
    how_to_fix: &'static str,
}

impl Def {
    fn build(&self) -> Rule {
        Rule {
            id: self.id.to_string(),
            description: self.description.to_string(),
            category: self.category.to_string(),
            severity: self.severity,
            recommended: self.recommended,
            rule_type: self.rule_type,
            given: self.given.to_string(),
            then: RuleAction {
                field: self.field.map(str::to_string),
                function: self.function.to_string(),
            },
            how_to_fix: self.how_to_fix.to_string(),
        }
    }
}

const DEFS: &[Def] = &[
    // Information
    Def {
        id: "info-contact",
        category: CATEGORY_INFO,
        severity: Warn,
        recommended: true,
        rule_type: Style,
        given: "$.info",
        field: Some("contact"),
        function: "truthy",
        description: "Info section is missing contact details",
        how_to_fix: "Add a contact object to the info section with a name, url and email.",
    },
    Def {
        id: "info-description",
        category: CATEGORY_INFO,
        severity: Error,
        recommended: true,
        rule_type: Validation,
        given: "$.info",
        field: Some("description"),
        function: "truthy",
        description: "Info section is missing a description",
        how_to_fix: "Describe what the API does and who it is for in info.description.",
    },
    Def {
        id: "info-license",
        category: CATEGORY_INFO,
        severity: Info,
        recommended: false,
        rule_type: Style,
        given: "$.info",
        field: Some("license"),
        function: "truthy",
        description: "Info section should contain a license",
        how_to_fix: "Add a license object naming the license the contract is published under.",
    },
    Def {
        id: "license-url",
        category: CATEGORY_INFO,
        severity: Info,
        recommended: false,
        rule_type: Style,
        given: "$.info.license",
        field: Some("url"),
        function: "truthy",
        description: "License should contain a url",
        how_to_fix: "Add a url to the license object pointing at the full license text.",
    },
    // Operations
    Def {
        id: "operation-success-response",
        category: CATEGORY_OPERATIONS,
        severity: Warn,
        recommended: true,
        rule_type: Style,
        given: "$.paths[*][*]",
        field: Some("responses"),
        function: "oasOpSuccessResponse",
        description: "Operation must have at least one 2xx or 3xx response",
        how_to_fix: "Add a 2xx or 3xx response describing what a successful call returns.",
    },
    Def {
        id: "operation-operationId",
        category: CATEGORY_OPERATIONS,
        severity: Error,
        recommended: true,
        rule_type: Validation,
        given: "$.paths[*][*]",
        field: Some("operationId"),
        function: "truthy",
        description: "Every operation must contain an operationId",
        how_to_fix: "Give every operation a unique operationId, code generators rely on it.",
    },
    Def {
        id: "operation-operationId-unique",
        category: CATEGORY_OPERATIONS,
        severity: Error,
        recommended: true,
        rule_type: Validation,
        given: "$.paths",
        field: None,
        function: "oasOpIdUnique",
        description: "Every operation must have a unique operationId",
        how_to_fix: "Rename the duplicated operationId so each operation is unique.",
    },
    Def {
        id: "operation-operationId-valid-in-url",
        category: CATEGORY_OPERATIONS,
        severity: Error,
        recommended: true,
        rule_type: Validation,
        given: "$.paths[*][*].operationId",
        field: None,
        function: "pattern",
        description: "OperationId must use URL friendly characters",
        how_to_fix: "Use only letters, digits and -._~ in operationIds.",
    },
    Def {
        id: "operation-parameters",
        category: CATEGORY_OPERATIONS,
        severity: Warn,
        recommended: true,
        rule_type: Validation,
        given: "$.paths[*][*].parameters",
        field: None,
        function: "oasOpParams",
        description: "Operation parameters are unique and non-repeating",
        how_to_fix: "Remove the duplicated parameter, or give it a distinct name and location.",
    },
    Def {
        id: "operation-singular-tag",
        category: CATEGORY_OPERATIONS,
        severity: Warn,
        recommended: false,
        rule_type: Style,
        given: "$.paths[*][*]",
        field: Some("tags"),
        function: "oasOpSingleTag",
        description: "Operation cannot have more than a single tag defined",
        how_to_fix: "Keep one tag per operation so generated clients group cleanly.",
    },
    // Tags
    Def {
        id: "operation-tags",
        category: CATEGORY_TAGS,
        severity: Warn,
        recommended: true,
        rule_type: Validation,
        given: "$.paths[*][*]",
        field: Some("tags"),
        function: "oasOperationTags",
        description: "Operation tags are missing or empty",
        how_to_fix: "Tag every operation so documentation tools can group it.",
    },
    Def {
        id: "openapi-tags",
        category: CATEGORY_TAGS,
        severity: Warn,
        recommended: true,
        rule_type: Style,
        given: "$",
        field: Some("tags"),
        function: "schema",
        description: "Top level spec tags must not be empty, and must be an array",
        how_to_fix: "Declare the tags used by operations in the top level tags array.",
    },
    Def {
        id: "openapi-tags-alphabetical",
        category: CATEGORY_TAGS,
        severity: Info,
        recommended: false,
        rule_type: Style,
        given: "$",
        field: Some("tags"),
        function: "alphabetical",
        description: "Tags must be in alphabetical order",
        how_to_fix: "Sort the top level tags array by name.",
    },
    Def {
        id: "tag-description",
        category: CATEGORY_TAGS,
        severity: Warn,
        recommended: true,
        rule_type: Style,
        given: "$.tags",
        field: Some("description"),
        function: "oasTagDescription",
        description: "Tag must have a description defined",
        how_to_fix: "Add a description to every tag explaining what its operations cover.",
    },
    // Schemas
    Def {
        id: "typed-enum",
        category: CATEGORY_SCHEMAS,
        severity: Warn,
        recommended: true,
        rule_type: Validation,
        given: "$..[?(@.enum)]",
        field: None,
        function: "typedEnum",
        description: "Enum values must respect the specified type",
        how_to_fix: "Make every enum value match the schema's declared type.",
    },
    Def {
        id: "duplicated-entry-in-enum",
        category: CATEGORY_SCHEMAS,
        severity: Warn,
        recommended: true,
        rule_type: Validation,
        given: "$..[?(@.enum)]",
        field: Some("enum"),
        function: "duplicatedEnum",
        description: "Enum values must not have duplicate entry",
        how_to_fix: "Remove the duplicated value from the enum.",
    },
    Def {
        id: "no-$ref-siblings",
        category: CATEGORY_SCHEMAS,
        severity: Error,
        recommended: true,
        rule_type: Validation,
        given: "$..[?(@.$ref)]",
        field: None,
        function: "refSiblings",
        description: "$ref values cannot be placed next to other properties (like a description)",
        how_to_fix: "Move sibling properties into the referenced schema, or wrap the $ref in allOf.",
    },
    Def {
        id: "oas3-unused-component",
        category: CATEGORY_SCHEMAS,
        severity: Warn,
        recommended: true,
        rule_type: Validation,
        given: "$",
        field: None,
        function: "oasUnusedComponent",
        description: "Check for unused components and bad references",
        how_to_fix: "Reference the component from an operation, or delete it.",
    },
    // Validation
    Def {
        id: "path-params",
        category: CATEGORY_VALIDATION,
        severity: Error,
        recommended: true,
        rule_type: Validation,
        given: "$",
        field: None,
        function: "oasPathParam",
        description: "Path parameters must be defined and valid",
        how_to_fix: "Declare every templated path segment as a required path parameter.",
    },
    Def {
        id: "path-declarations-must-exist",
        category: CATEGORY_VALIDATION,
        severity: Error,
        recommended: true,
        rule_type: Validation,
        given: "$.paths",
        field: None,
        function: "pattern",
        description: "Path parameter declarations must not be empty, ex.'/api/{}' is invalid",
        how_to_fix: "Name the empty path template, for example /api/{id}.",
    },
    Def {
        id: "path-keys-no-trailing-slash",
        category: CATEGORY_VALIDATION,
        severity: Warn,
        recommended: true,
        rule_type: Style,
        given: "$.paths",
        field: None,
        function: "pattern",
        description: "Path must not end with a slash",
        how_to_fix: "Remove the trailing slash from the path key.",
    },
    Def {
        id: "path-not-include-query",
        category: CATEGORY_VALIDATION,
        severity: Error,
        recommended: true,
        rule_type: Validation,
        given: "$.paths",
        field: None,
        function: "pattern",
        description: "Path must not include query string",
        how_to_fix: "Move the query string into query parameters on the operation.",
    },
    Def {
        id: "oas3-api-servers",
        category: CATEGORY_VALIDATION,
        severity: Warn,
        recommended: true,
        rule_type: Validation,
        given: "$",
        field: Some("servers"),
        function: "oasAPIServers",
        description: "Check for valid API servers definition",
        how_to_fix: "Add a servers array with at least one valid url.",
    },
    // Descriptions
    Def {
        id: "operation-description",
        category: CATEGORY_DESCRIPTIONS,
        severity: Warn,
        recommended: true,
        rule_type: Style,
        given: "$.paths[*][*]",
        field: Some("description"),
        function: "oasDescriptions",
        description: "Operation description checks",
        how_to_fix: "Describe what the operation does, what it needs and what it returns.",
    },
    Def {
        id: "component-description",
        category: CATEGORY_DESCRIPTIONS,
        severity: Warn,
        recommended: true,
        rule_type: Style,
        given: "$.components",
        field: None,
        function: "oasComponentDescriptions",
        description: "Component description check",
        how_to_fix: "Add a description to every component explaining what it represents.",
    },
    Def {
        id: "description-duplication",
        category: CATEGORY_DESCRIPTIONS,
        severity: Info,
        recommended: true,
        rule_type: Style,
        given: "$",
        field: None,
        function: "oasDescriptionDuplication",
        description: "Description duplication check",
        how_to_fix: "Write a description specific to each node rather than copying another.",
    },
    Def {
        id: "no-eval-in-markdown",
        category: CATEGORY_DESCRIPTIONS,
        severity: Error,
        recommended: true,
        rule_type: Validation,
        given: "$..description",
        field: None,
        function: "pattern",
        description: "Markdown descriptions must not have 'eval('",
        how_to_fix: "Remove the eval( call from the description.",
    },
    Def {
        id: "no-script-tags-in-markdown",
        category: CATEGORY_DESCRIPTIONS,
        severity: Error,
        recommended: true,
        rule_type: Validation,
        given: "$..description",
        field: None,
        function: "pattern",
        description: "Markdown descriptions must not have '<script>' tags",
        how_to_fix: "Remove the script tag from the description.",
    },
    // Examples
    Def {
        id: "oas3-valid-schema-example",
        category: CATEGORY_EXAMPLES,
        severity: Warn,
        recommended: true,
        rule_type: Validation,
        given: "$",
        field: None,
        function: "oasExampleSchema",
        description: "If an example has been used, check the schema is valid",
        how_to_fix: "Fix the example so it validates against its schema.",
    },
    Def {
        id: "oas3-missing-example",
        category: CATEGORY_EXAMPLES,
        severity: Warn,
        recommended: true,
        rule_type: Style,
        given: "$",
        field: None,
        function: "oasExampleMissing",
        description: "Ensure everything that can have an example, contains one",
        how_to_fix: "Add an example to the schema, parameter or media type.",
    },
    // Security
    Def {
        id: "oas3-operation-security-defined",
        category: CATEGORY_SECURITY,
        severity: Error,
        recommended: true,
        rule_type: Validation,
        given: "$",
        field: None,
        function: "oasOpSecurityDefined",
        description: "Operation security values must match a scheme defined in components",
        how_to_fix: "Declare the referenced scheme under components.securitySchemes.",
    },
    Def {
        id: "oas3-host-not-example",
        category: CATEGORY_SECURITY,
        severity: Warn,
        recommended: false,
        rule_type: Style,
        given: "$.servers[*].url",
        field: None,
        function: "pattern",
        description: "Server URL should not point to example.com",
        how_to_fix: "Point the server url at a real host.",
    },
    Def {
        id: "no-http-basic",
        category: CATEGORY_SECURITY,
        severity: Error,
        recommended: true,
        rule_type: Validation,
        given: "$.components.securitySchemes[*]",
        field: Some("scheme"),
        function: "pattern",
        description: "Security scheme uses HTTP Basic, credentials travel unencrypted",
        how_to_fix: "Use a token based scheme such as bearer or OAuth2 instead of basic auth.",
    },
];

/// Every rule the linter ships with, in catalog order.
pub fn builtin_rules() -> Vec<Rule> {
    DEFS.iter().map(Def::build).collect()
}
