use serde::Serialize;

/// One month of a projected hire.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CashFlowRecord {
    pub month: usize,
    pub production_factor: f64,
    pub revenue: f64,
    pub fixed_cost: f64,
    pub hiring_cost: f64,
    pub training_cost: f64,
    pub ojt_cost: f64,
    pub cost: f64,
    pub net_cash_flow: f64,
    pub cumulative_cash_flow: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_factor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pv_cash_flow: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cumulative_pv: Option<f64>,
}

impl CashFlowRecord {
    /// Cumulative present value when requested and available, otherwise the plain
    /// cumulative cash flow.
    pub fn cumulative(&self, discounted: bool) -> f64 {
        match (discounted, self.cumulative_pv) {
            (true, Some(value)) => value,
            _ => self.cumulative_cash_flow,
        }
    }
}

/// Month-ordered projection covering months `0..=horizon`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CashFlowSeries {
    discounted: bool,
    records: Vec<CashFlowRecord>,
}

impl CashFlowSeries {
    pub(crate) fn new(records: Vec<CashFlowRecord>, discounted: bool) -> Self {
        Self {
            discounted,
            records,
        }
    }

    pub fn records(&self) -> &[CashFlowRecord] {
        &self.records
    }

    /// Whether the present-value columns are populated.
    pub fn is_discounted(&self) -> bool {
        self.discounted
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn horizon_months(&self) -> usize {
        self.records.len().saturating_sub(1)
    }
}

/// Payback month of a projection. `None` means payback lies beyond the horizon.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakevenResult {
    pub month: Option<usize>,
}

impl BreakevenResult {
    pub fn is_reached(&self) -> bool {
        self.month.is_some()
    }
}
