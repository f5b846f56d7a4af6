mod allocation;
mod market;
mod profile;
mod projection;

pub use allocation::{AllocationCategory, AllocationResponse, ChartSlice, RecommendationPayload};
pub use market::{
    parse_instant, BatchHistoricalParams, DateWindow, HistoricalClose, HistoricalParams,
    RangeParams, SearchParams,
};
pub use profile::{AllocationQuery, ProfileForm, ProfileInput};
pub use projection::{
    CompareParams, GrowthParams, LoanVsDeposit, LoanVsDepositParams, ProjectionComparison,
    ProjectionOutcome, ProjectionPoint, ProjectionScenario,
};
