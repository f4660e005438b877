use thiserror::Error;

/// The simulator has no recoverable runtime errors under normal
/// operation; these variants are the defensive contracts around bad
/// configuration and buggy policies. Arithmetic invariants (negative
/// waits, burst underflow) are asserts instead, since they can only come
/// from a programming error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("workload configuration rejected: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error(
        "arrival sampling exhausted {attempts} attempts without landing under the {cap}ms cap; \
         the cap is incompatible with the arrival rate"
    )]
    ArrivalResampleExhausted { attempts: usize, cap: usize },

    #[error(
        "{policy} made no progress: {iterations} loop iterations exceeded the safety bound of \
         {bound}; the policy never selects an eligible process"
    )]
    SafetyBoundExceeded {
        policy: &'static str,
        iterations: usize,
        bound: usize,
    },
}
