use crate::template::{Resource, Template};
use eyre::eyre;
use indexmap::IndexMap;

/// Target account and region for a stack
#[derive(Clone, Debug)]
pub struct Environment {
    pub account: Option<String>,
    pub region: String,
}

impl Environment {
    pub fn new(region: &str, account: Option<String>) -> Self {
        Environment {
            account,
            region: region.to_string(),
        }
    }

    /// "aws://<account>/<region>" identifier used in the assembly manifest
    pub fn to_uri(&self) -> String {
        format!(
            "aws://{}/{}",
            self.account.as_deref().unwrap_or("unknown-account"),
            self.region
        )
    }
}

/// A named, deployable group of resource declarations
#[derive(Clone, Debug)]
pub struct Stack {
    pub name: String,
    pub env: Environment,
    pub description: Option<String>,
    resources: IndexMap<String, Resource>,
}

impl Stack {
    pub fn new(name: &str, env: Environment) -> Self {
        Stack {
            name: name.to_string(),
            env,
            description: None,
            resources: IndexMap::new(),
        }
    }

    /// Declare a resource under a logical ID, unique within the stack
    pub fn add_resource(&mut self, logical_id: &str, resource: Resource) -> eyre::Result<()> {
        if self.resources.contains_key(logical_id) {
            return Err(eyre!(
                "Duplicate logical ID \"{logical_id}\" in stack {}",
                self.name
            ));
        }

        self.resources.insert(logical_id.to_string(), resource);
        Ok(())
    }

    /// Render the stack into a CFN template
    pub fn template(&self) -> Template {
        Template::new(self.description.clone(), self.resources.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bucket::{Bucket, BucketEncryption, RemovalPolicy};
    use pretty_assertions::assert_eq;

    #[test]
    fn environment_uri_defaults_the_account() {
        let env = Environment::new("eu-west-1", None);

        assert_eq!(env.to_uri(), "aws://unknown-account/eu-west-1");
    }

    #[test]
    fn environment_uri_includes_the_account() {
        let env = Environment::new("us-east-1", Some("123456789012".to_string()));

        assert_eq!(env.to_uri(), "aws://123456789012/us-east-1");
    }

    #[test]
    fn rejects_duplicate_logical_ids() {
        let mut stack = Stack::new("Buckets", Environment::new("us-east-1", None));
        let bucket = Bucket::new(BucketEncryption::Unencrypted, RemovalPolicy::Destroy);

        stack.add_resource("MyNewBucket", bucket.resource()).unwrap();
        let result = stack.add_resource("MyNewBucket", bucket.resource());

        assert!(result.is_err());
    }

    #[test]
    fn template_keeps_declared_resources() {
        let mut stack = Stack::new("Buckets", Environment::new("us-east-1", None));
        let bucket = Bucket::new(BucketEncryption::KmsManaged, RemovalPolicy::Destroy);
        stack.add_resource("MyNewBucket", bucket.resource()).unwrap();

        let template = stack.template();

        assert_eq!(template.resources.len(), 1);
        assert_eq!(template.resources["MyNewBucket"].kind, "AWS::S3::Bucket");
    }
}
