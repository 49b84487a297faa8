use crate::assembly::{self, Manifest};
use crate::bucket::{Bucket, BucketEncryption, RemovalPolicy};
use crate::config::Config;
use crate::stack::{Environment, Stack};
use eyre::eyre;
use std::path::Path;

/// Ordered collection of stacks making up one application
#[derive(Debug, Default)]
pub struct App {
    stacks: Vec<Stack>,
}

impl App {
    /// Register a stack, unique by name within the app
    pub fn stack(&mut self, stack: Stack) -> eyre::Result<()> {
        if self.stacks.iter().any(|s| s.name == stack.name) {
            return Err(eyre!("Duplicate stack name: {}", stack.name));
        }

        self.stacks.push(stack);
        Ok(())
    }

    pub fn stacks(&self) -> &[Stack] {
        &self.stacks
    }

    pub fn get(&self, name: &str) -> Option<&Stack> {
        self.stacks.iter().find(|s| s.name == name)
    }

    /// Write every stack template plus the manifest into the out directory
    pub fn synth(&self, out: &Path) -> eyre::Result<Manifest> {
        assembly::write(self, out)
    }
}

/// The two-region bucket application
///
/// The west stack keeps its bucket unencrypted, the east one encrypts it with
/// the AWS-managed KMS key.
pub fn bucket_app(config: &Config) -> eyre::Result<App> {
    let account = config.account();
    let mut app = App::default();

    app.stack(bucket_stack(
        "MyWestCdkStack",
        Environment::new("us-west-1", account.clone()),
        false,
    )?)?;

    app.stack(bucket_stack(
        "MyEastCdkStack",
        Environment::new("us-east-1", account),
        true,
    )?)?;

    Ok(app)
}

/// Declare a stack holding a single bucket, optionally encrypted
///
/// The bucket is destroyed together with its stack in both cases.
pub fn bucket_stack(name: &str, env: Environment, encrypt_bucket: bool) -> eyre::Result<Stack> {
    let encryption = if encrypt_bucket {
        BucketEncryption::KmsManaged
    } else {
        BucketEncryption::Unencrypted
    };

    let mut stack = Stack::new(name, env);
    stack.add_resource(
        "MyNewBucket",
        Bucket::new(encryption, RemovalPolicy::Destroy).resource(),
    )?;

    Ok(stack)
}
