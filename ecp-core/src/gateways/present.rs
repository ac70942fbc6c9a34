use crate::entities::*;

/// Consumes the outcome of a proximity search.
///
/// Use cases emit events through this trait instead of rendering
/// anything themselves, so the same flow drives a terminal, a GUI
/// or a test double. One call per candidate point, then one call
/// per waste kind.
pub trait PresentationGateway {
    fn point_filtered(&self, result: &PointFilterResult);
    fn kind_summarized(&self, summary: &KindSummary);
}
