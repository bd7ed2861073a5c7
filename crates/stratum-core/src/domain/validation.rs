use crate::domain::{
    entities::{ProjectGraph, SolutionRequest},
    error::DomainError,
    value_objects::SolutionName,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_request(request: &SolutionRequest) -> Result<SolutionName, DomainError> {
        request.validate()
    }

    pub fn validate_graph(graph: &ProjectGraph) -> Result<(), DomainError> {
        graph.validate()
    }
}
