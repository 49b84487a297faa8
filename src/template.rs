use indexmap::IndexMap;
use serde::Serialize;

/// CloudFormation template for a single stack
///
/// Resources keep their declaration order when serialized.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Template {
    #[serde(rename = "AWSTemplateFormatVersion")]
    pub format_version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub resources: IndexMap<String, Resource>,
}

impl Template {
    pub fn new(description: Option<String>, resources: IndexMap<String, Resource>) -> Self {
        Template {
            format_version: "2010-09-09".to_string(),
            description,
            resources,
        }
    }
}

/// A single resource declaration with its lifecycle policies
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Resource {
    #[serde(rename = "Type")]
    pub kind: String,

    /// Omitted entirely when the resource has no configurable properties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_policy: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_replace_policy: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_with_cloudformation_keys() {
        let mut resources = IndexMap::new();
        resources.insert(
            "MyNewBucket".to_string(),
            Resource {
                kind: "AWS::S3::Bucket".to_string(),
                properties: None,
                deletion_policy: Some("Delete".to_string()),
                update_replace_policy: Some("Delete".to_string()),
            },
        );

        let template = Template::new(Some("A bucket".to_string()), resources);
        let value = serde_json::to_value(&template).unwrap();

        assert_eq!(value["AWSTemplateFormatVersion"], "2010-09-09");
        assert_eq!(value["Description"], "A bucket");
        assert_eq!(value["Resources"]["MyNewBucket"]["Type"], "AWS::S3::Bucket");
        assert_eq!(value["Resources"]["MyNewBucket"]["DeletionPolicy"], "Delete");
        assert_eq!(
            value["Resources"]["MyNewBucket"]["UpdateReplacePolicy"],
            "Delete"
        );
        assert!(value["Resources"]["MyNewBucket"].get("Properties").is_none());
    }

    #[test]
    fn omits_description_when_absent() {
        let template = Template::new(None, IndexMap::new());
        let value = serde_json::to_value(&template).unwrap();

        assert!(value.get("Description").is_none());
    }
}
