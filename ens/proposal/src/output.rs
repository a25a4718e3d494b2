use {
    crate::Result,
    ens_types::ProposalDescriptor,
    serde_json::{Value, json},
};

/// Field holding the governor `propose` calldata when it is requested.
pub const PROPOSE_CALLDATA_FIELD: &str = "proposeCalldata";

/// Render the descriptor as one pretty-printed JSON document, optionally with
/// the governor `propose` calldata as an extra top-level field.
pub fn render_descriptor(
    descriptor: &ProposalDescriptor,
    with_propose_calldata: bool,
) -> Result<String> {
    let mut value = serde_json::to_value(descriptor)?;

    if with_propose_calldata {
        if let Value::Object(map) = &mut value {
            map.insert(
                PROPOSE_CALLDATA_FIELD.to_string(),
                json!(descriptor.propose_calldata()),
            );
        }
    }

    Ok(serde_json::to_string_pretty(&value)?)
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{ProposalBuilder, ProposalConfig},
        assertor::*,
    };

    fn descriptor() -> ProposalDescriptor {
        ProposalBuilder::from_config(&ProposalConfig::default())
            .unwrap()
            .build()
            .unwrap()
            .descriptor
    }

    #[test]
    fn plain_output_is_the_descriptor() {
        let descriptor = descriptor();
        let output = render_descriptor(&descriptor, false).unwrap();

        let value: Value = serde_json::from_str(&output).unwrap();
        assert!(value.get(PROPOSE_CALLDATA_FIELD).is_none());

        let back: ProposalDescriptor = serde_json::from_value(value).unwrap();
        assert_that!(back).is_equal_to(descriptor);
    }

    #[test]
    fn propose_calldata_stays_inside_the_json_document() {
        let descriptor = descriptor();
        let output = render_descriptor(&descriptor, true).unwrap();

        // The whole output must parse as a single document.
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_that!(value[PROPOSE_CALLDATA_FIELD].as_str().map(str::to_string))
            .is_equal_to(Some(descriptor.propose_calldata().to_string()));

        let back: ProposalDescriptor = serde_json::from_value(value).unwrap();
        assert_that!(back).is_equal_to(descriptor);
    }
}
