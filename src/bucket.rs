use crate::template::Resource;
use serde_json::json;

/// Server-side encryption mode for a bucket
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BucketEncryption {
    /// No server-side encryption is configured
    Unencrypted,

    /// SSE-KMS with the AWS-managed key
    KmsManaged,
}

/// What happens to the bucket when its stack is deleted or replaced
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RemovalPolicy {
    Retain,
    Destroy,
}

impl RemovalPolicy {
    fn as_cfn(self) -> &'static str {
        match self {
            RemovalPolicy::Retain => "Retain",
            RemovalPolicy::Destroy => "Delete",
        }
    }
}

/// An S3 bucket declaration
#[derive(Clone, Debug)]
pub struct Bucket {
    pub encryption: BucketEncryption,
    pub removal_policy: RemovalPolicy,
}

impl Bucket {
    pub fn new(encryption: BucketEncryption, removal_policy: RemovalPolicy) -> Self {
        Bucket {
            encryption,
            removal_policy,
        }
    }

    /// CFN resource for the bucket
    pub fn resource(&self) -> Resource {
        let properties = match self.encryption {
            BucketEncryption::Unencrypted => None,
            BucketEncryption::KmsManaged => Some(json!({
                "BucketEncryption": {
                    "ServerSideEncryptionConfiguration": [
                        {
                            "ServerSideEncryptionByDefault": {
                                "SSEAlgorithm": "aws:kms"
                            }
                        }
                    ]
                }
            })),
        };

        Resource {
            kind: "AWS::S3::Bucket".to_string(),
            properties,
            deletion_policy: Some(self.removal_policy.as_cfn().to_string()),
            update_replace_policy: Some(self.removal_policy.as_cfn().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn kms_managed_bucket_declares_sse() {
        let resource = Bucket::new(BucketEncryption::KmsManaged, RemovalPolicy::Destroy).resource();
        let properties = resource.properties.expect("encrypted bucket has properties");

        assert_eq!(
            properties["BucketEncryption"]["ServerSideEncryptionConfiguration"][0]
                ["ServerSideEncryptionByDefault"]["SSEAlgorithm"],
            "aws:kms"
        );
    }

    #[test]
    fn unencrypted_bucket_has_no_properties() {
        let resource =
            Bucket::new(BucketEncryption::Unencrypted, RemovalPolicy::Destroy).resource();

        assert!(resource.properties.is_none());
    }

    #[test]
    fn destroy_policy_maps_to_delete() {
        let resource =
            Bucket::new(BucketEncryption::Unencrypted, RemovalPolicy::Destroy).resource();

        assert_eq!(resource.deletion_policy.as_deref(), Some("Delete"));
        assert_eq!(resource.update_replace_policy.as_deref(), Some("Delete"));
    }

    #[test]
    fn retain_policy_is_kept_verbatim() {
        let resource =
            Bucket::new(BucketEncryption::Unencrypted, RemovalPolicy::Retain).resource();

        assert_eq!(resource.deletion_policy.as_deref(), Some("Retain"));
        assert_eq!(resource.update_replace_policy.as_deref(), Some("Retain"));
    }
}
