//! Generated deployment-output document handling.
//!
//! The deploy step writes a JSON document shaped
//! `{ [stackName]: { [outputKey]: value } }`. Exactly one stack is expected;
//! anything else makes it ambiguous which stack's outputs to publish.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// Static projection from stack output keys to repository secret names.
pub const OUTPUT_SECRETS: &[(&str, &str)] = &[
    ("ghaAccessKeyId", "AWS_ACCESS_KEY_ID"),
    ("ghaSecretAccessKey", "AWS_SECRET_ACCESS_KEY"),
    ("clusterArn", "CLUSTER_ARN"),
];

/// Outputs of the single stack in the deployment document.
#[derive(Debug)]
pub struct StackOutputs {
    pub stack: String,
    pub outputs: BTreeMap<String, String>,
}

/// One secret ready for upload.
pub struct LocalSecret {
    pub name: &'static str,
    pub value: Zeroizing<String>,
}

/// Load the deployment outputs document from `path`.
pub fn load(path: &Path) -> Result<StackOutputs> {
    if !path.exists() {
        return Err(Error::MissingOutputFile(path.to_path_buf()));
    }

    let contents = std::fs::read_to_string(path)?;
    let mut document: BTreeMap<String, BTreeMap<String, String>> =
        serde_json::from_str(contents.trim())?;

    if document.len() != 1 {
        return Err(Error::AmbiguousStack(document.len()));
    }
    let Some((stack, outputs)) = document.pop_first() else {
        return Err(Error::AmbiguousStack(0));
    };

    debug!(stack = %stack, outputs = outputs.len(), "loaded deployment outputs");
    Ok(StackOutputs { stack, outputs })
}

/// Project stack outputs into the secrets to upload.
///
/// A missing or empty output key is fatal: an undefined value must never be
/// uploaded as a secret.
pub fn project(stack: &StackOutputs) -> Result<Vec<LocalSecret>> {
    let mut secrets = Vec::with_capacity(OUTPUT_SECRETS.len());
    for (output_key, secret_name) in OUTPUT_SECRETS {
        let value = stack
            .outputs
            .get(*output_key)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::MissingOutputKey {
                stack: stack.stack.clone(),
                key: (*output_key).to_string(),
            })?;
        secrets.push(LocalSecret {
            name: secret_name,
            value: Zeroizing::new(value.clone()),
        });
    }
    Ok(secrets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_outputs(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_single_stack() {
        let file = write_outputs(
            r#"{"Stack1": {"ghaAccessKeyId": "AKIA", "ghaSecretAccessKey": "s3cr3t", "clusterArn": "arn:aws:ecs:eu-west-2:1:cluster/x"}}"#,
        );

        let stack = load(file.path()).unwrap();
        assert_eq!(stack.stack, "Stack1");
        assert_eq!(stack.outputs.len(), 3);
        assert_eq!(stack.outputs["ghaAccessKeyId"], "AKIA");
    }

    #[test]
    fn test_load_missing_file() {
        let result = load(Path::new("/nonexistent/cdk-outputs.json"));
        assert!(matches!(result, Err(Error::MissingOutputFile(_))));
    }

    #[test]
    fn test_load_two_stacks_is_ambiguous() {
        let file = write_outputs(r#"{"Stack1": {}, "Stack2": {}}"#);

        let result = load(file.path());
        assert!(matches!(result, Err(Error::AmbiguousStack(2))));
    }

    #[test]
    fn test_load_empty_document_is_ambiguous() {
        let file = write_outputs("{}");

        let result = load(file.path());
        assert!(matches!(result, Err(Error::AmbiguousStack(0))));
    }

    #[test]
    fn test_project_maps_output_keys_to_secret_names() {
        let stack = StackOutputs {
            stack: "Stack1".to_string(),
            outputs: BTreeMap::from([
                ("ghaAccessKeyId".to_string(), "AKIA".to_string()),
                ("ghaSecretAccessKey".to_string(), "s3cr3t".to_string()),
                ("clusterArn".to_string(), "arn:aws:ecs".to_string()),
                ("serviceUrl".to_string(), "https://example.org".to_string()),
            ]),
        };

        let secrets = project(&stack).unwrap();
        let names: Vec<&str> = secrets.iter().map(|s| s.name).collect();

        assert_eq!(
            names,
            vec!["AWS_ACCESS_KEY_ID", "AWS_SECRET_ACCESS_KEY", "CLUSTER_ARN"]
        );
        assert_eq!(secrets[0].value.as_str(), "AKIA");
    }

    #[test]
    fn test_project_missing_key_is_fatal() {
        let stack = StackOutputs {
            stack: "Stack1".to_string(),
            outputs: BTreeMap::from([("ghaAccessKeyId".to_string(), "AKIA".to_string())]),
        };

        let result = project(&stack);
        assert!(matches!(
            result,
            Err(Error::MissingOutputKey { ref key, .. }) if key == "ghaSecretAccessKey"
        ));
    }

    #[test]
    fn test_project_empty_value_is_fatal() {
        let stack = StackOutputs {
            stack: "Stack1".to_string(),
            outputs: BTreeMap::from([
                ("ghaAccessKeyId".to_string(), "AKIA".to_string()),
                ("ghaSecretAccessKey".to_string(), String::new()),
                ("clusterArn".to_string(), "arn".to_string()),
            ]),
        };

        let result = project(&stack);
        assert!(matches!(
            result,
            Err(Error::MissingOutputKey { ref key, .. }) if key == "ghaSecretAccessKey"
        ));
    }
}
