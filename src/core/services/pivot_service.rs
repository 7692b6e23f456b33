use crate::config::PivotConfig;
use crate::domain::{Person, PivotResult, PivotSpec, Receipt};
use crate::pivot::{compute_pivot, distinct_from_receipts, FilterOptions, PeopleIndex};

use super::{ServiceError, ServiceResult};

/// Entry point for callers holding receipts and a roster.
pub struct PivotService;

impl PivotService {
    /// Validates `spec` and computes the pivot. An empty roster means ids are echoed.
    pub fn compute(
        receipts: &[Receipt],
        spec: &PivotSpec,
        people: &[Person],
    ) -> ServiceResult<PivotResult> {
        spec.validate()?;
        let index = (!people.is_empty()).then(|| PeopleIndex::build(people));
        Ok(compute_pivot(receipts, spec, index.as_ref()))
    }

    /// Same as [`PivotService::compute`] with every input given as JSON.
    pub fn compute_json(
        receipts_json: &str,
        people_json: Option<&str>,
        spec_json: &str,
    ) -> ServiceResult<PivotResult> {
        let spec = PivotSpec::from_json(spec_json).map_err(|err| {
            tracing::warn!(error = %err, "rejecting pivot spec");
            ServiceError::from(err)
        })?;
        let receipts: Vec<Receipt> = parse_document("receipts", receipts_json)?;
        let people: Vec<Person> = match people_json {
            Some(raw) => parse_document("people", raw)?,
            None => Vec::new(),
        };
        Self::compute(&receipts, &spec, &people)
    }

    /// Runs the spec a fresh view opens with.
    pub fn compute_default(
        receipts: &[Receipt],
        people: &[Person],
        config: &PivotConfig,
    ) -> ServiceResult<PivotResult> {
        Self::compute(receipts, &config.default_spec, people)
    }

    /// Runs a named preset from `config`.
    pub fn compute_preset(
        receipts: &[Receipt],
        people: &[Person],
        config: &PivotConfig,
        preset: &str,
    ) -> ServiceResult<PivotResult> {
        let spec = config
            .preset(preset)
            .ok_or_else(|| ServiceError::PresetNotFound(preset.to_string()))?;
        Self::compute(receipts, spec, people)
    }

    pub fn filter_options(receipts: &[Receipt]) -> FilterOptions {
        distinct_from_receipts(receipts)
    }
}

fn parse_document<T>(what: &str, raw: &str) -> ServiceResult<T>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(raw).map_err(|err| {
        tracing::warn!(document = what, error = %err, "failed to parse pivot input");
        ServiceError::from(crate::errors::PivotError::from(err))
    })
}
