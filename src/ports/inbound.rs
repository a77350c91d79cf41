//! Inbound port. A presentation layer calls into the application here.

/// One application operation. Failures come back as values inside `Output`,
/// never as panics.
#[async_trait::async_trait]
pub trait UseCase<Input, Output>: Send + Sync
where
    Input: Send + 'static,
    Output: Send + 'static,
{
    async fn execute(&self, input: Input) -> Output;
}
