use contracts::dashboards::d400_forecast::RecordSet;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;

/// Number of required weekly upload slots.
pub const WEEK_SLOTS: usize = 4;

/// Client-side gate message when a weekly slot is empty.
pub const MISSING_WEEKS_ERROR: &str = "Please upload all 4 weekly CSV files.";

/// Upload form state: four required weekly slots plus one optional
/// sales-plan slot. Generic over the file handle so the slot logic is
/// testable off-wasm; the dashboard instantiates it with `web_sys::File`.
///
/// No validation happens at mutation time; any staged file is accepted
/// and format checking is left to the forecast service.
#[derive(Debug, Clone)]
pub struct UploadSlots<F = web_sys::File> {
    weeks: [Option<F>; WEEK_SLOTS],
    sales_plan: Option<F>,
}

impl<F> Default for UploadSlots<F> {
    fn default() -> Self {
        Self {
            weeks: std::array::from_fn(|_| None),
            sales_plan: None,
        }
    }
}

impl<F> UploadSlots<F> {
    /// Replace the file at one weekly index without touching the others.
    /// Out-of-range indices are ignored.
    pub fn set_week(&mut self, index: usize, file: Option<F>) {
        if let Some(slot) = self.weeks.get_mut(index) {
            *slot = file;
        }
    }

    pub fn set_sales_plan(&mut self, file: Option<F>) {
        self.sales_plan = file;
    }

    pub fn week(&self, index: usize) -> Option<&F> {
        self.weeks.get(index).and_then(Option::as_ref)
    }

    pub fn sales_plan(&self) -> Option<&F> {
        self.sales_plan.as_ref()
    }

    pub fn weeks_complete(&self) -> bool {
        self.weeks.iter().all(Option::is_some)
    }
}

impl<F: Clone> UploadSlots<F> {
    /// All four weekly files, or `None` while any slot is still empty.
    pub fn week_files(&self) -> Option<[F; WEEK_SLOTS]> {
        let [w1, w2, w3, w4] = &self.weeks;
        Some([w1.clone()?, w2.clone()?, w3.clone()?, w4.clone()?])
    }
}

/// Pre-network outcome of a submit call: the multipart payload when all
/// weekly slots are staged, otherwise the client-side failure message.
/// `submit()` never reaches the network on the `Err` branch.
fn prepare_submission<F: Clone>(
    slots: &UploadSlots<F>,
) -> Result<([F; WEEK_SLOTS], Option<F>), String> {
    match slots.week_files() {
        Some(weeks) => Ok((weeks, slots.sales_plan().cloned())),
        None => Err(MISSING_WEEKS_ERROR.to_string()),
    }
}

/// Lifecycle of one submission round-trip. The UI is a pure projection
/// of this state plus the two record sets on the controller.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl RequestState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, RequestState::Submitting)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Owns the whole forecast workflow state; constructed once in `App` and
/// handed to components via context. All mutations go through its
/// methods.
#[derive(Clone, Copy)]
pub struct ForecastController {
    // File handles are JS objects, so the slots live in local storage
    slots: RwSignal<UploadSlots, LocalStorage>,
    /// Latest submission result driving the orders table
    pub orders: RwSignal<RecordSet>,
    /// Series driving the chart; bootstrapped on mount, overwritten
    /// wholesale by every successful submission (last write wins)
    pub predictions: RwSignal<RecordSet>,
    pub request: RwSignal<RequestState>,
}

impl ForecastController {
    pub fn new() -> Self {
        Self {
            slots: RwSignal::new_local(UploadSlots::default()),
            orders: RwSignal::new(RecordSet::default()),
            predictions: RwSignal::new(RecordSet::default()),
            request: RwSignal::new(RequestState::default()),
        }
    }

    pub fn set_week_file(&self, index: usize, file: Option<web_sys::File>) {
        self.slots.update(|slots| slots.set_week(index, file));
    }

    pub fn set_sales_plan(&self, file: Option<web_sys::File>) {
        self.slots.update(|slots| slots.set_sales_plan(file));
    }

    pub fn week_file_name(&self, index: usize) -> Option<String> {
        self.slots.with(|slots| slots.week(index).map(|f| f.name()))
    }

    pub fn sales_plan_name(&self) -> Option<String> {
        self.slots.with(|slots| slots.sales_plan().map(|f| f.name()))
    }

    /// Opportunistic load of previously computed predictions. Failures
    /// are expected while nothing has been computed yet and are only
    /// logged; this path never surfaces an error to the user.
    pub fn load_predictions(&self) {
        let this = *self;
        spawn_local(async move {
            match api::get_predictions().await {
                Ok(rows) => this.predictions.set(rows),
                Err(err) => log::info!("Predictions not ready: {}", err),
            }
        });
    }

    /// Validate completeness and run one forecast round-trip. At most
    /// one submission is in flight at a time; the disabled submit button
    /// is only an affordance, the guard below is the invariant.
    pub fn submit(&self) {
        if self.request.with_untracked(RequestState::is_submitting) {
            return;
        }

        self.orders.set(RecordSet::default());

        // Hard client-side gate: never call the service with an
        // incomplete week set
        let prepared = self.slots.with_untracked(|slots| prepare_submission(slots));
        let (weeks, sales_plan) = match prepared {
            Ok(payload) => payload,
            Err(message) => {
                self.request.set(RequestState::Failed(message));
                return;
            }
        };

        self.request.set(RequestState::Submitting);
        let this = *self;
        spawn_local(async move {
            match api::run_forecast(&weeks, sales_plan.as_ref()).await {
                Ok(rows) => {
                    this.orders.set(rows.clone());
                    // The submission result doubles as the chart's data
                    // source, superseding any bootstrapped predictions
                    this.predictions.set(rows);
                    this.request.set(RequestState::Succeeded);
                }
                Err(err) => {
                    log::error!("Forecast request failed: {}", err);
                    this.request.set(RequestState::Failed(err));
                }
            }
        });
    }
}

impl Default for ForecastController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_week_replaces_one_slot_only() {
        let mut slots = UploadSlots::<String>::default();
        slots.set_week(0, Some("w1.csv".to_string()));
        slots.set_week(2, Some("w3.csv".to_string()));
        slots.set_week(2, Some("w3b.csv".to_string()));

        assert_eq!(slots.week(0).map(String::as_str), Some("w1.csv"));
        assert_eq!(slots.week(1), None);
        assert_eq!(slots.week(2).map(String::as_str), Some("w3b.csv"));
        assert_eq!(slots.week(3), None);
    }

    #[test]
    fn test_set_week_out_of_range_is_ignored() {
        let mut slots = UploadSlots::<String>::default();
        slots.set_week(4, Some("w5.csv".to_string()));
        assert!(!slots.weeks_complete());
        assert_eq!(slots.week(4), None);
    }

    #[test]
    fn test_clearing_a_slot_breaks_completeness() {
        let mut slots = UploadSlots::<String>::default();
        for i in 0..WEEK_SLOTS {
            slots.set_week(i, Some(format!("w{}.csv", i + 1)));
        }
        assert!(slots.weeks_complete());

        slots.set_week(1, None);
        assert!(!slots.weeks_complete());
        assert!(slots.week_files().is_none());
    }

    #[test]
    fn test_week_files_in_slot_order() {
        let mut slots = UploadSlots::<String>::default();
        for i in (0..WEEK_SLOTS).rev() {
            slots.set_week(i, Some(format!("w{}.csv", i + 1)));
        }
        let files = slots.week_files().unwrap();
        assert_eq!(files, ["w1.csv", "w2.csv", "w3.csv", "w4.csv"]);
    }

    #[test]
    fn test_sales_plan_is_optional_and_independent() {
        let mut slots = UploadSlots::<String>::default();
        slots.set_sales_plan(Some("plan.csv".to_string()));
        assert_eq!(slots.sales_plan().map(String::as_str), Some("plan.csv"));
        assert!(!slots.weeks_complete());

        slots.set_sales_plan(None);
        assert_eq!(slots.sales_plan(), None);
    }

    #[test]
    fn test_submission_blocked_until_all_weeks_staged() {
        let mut slots = UploadSlots::<String>::default();
        for i in 0..WEEK_SLOTS - 1 {
            slots.set_week(i, Some(format!("w{}.csv", i + 1)));
        }

        // 3 of 4 slots: the gate fails with the fixed message and no
        // payload is ever built
        assert_eq!(
            prepare_submission(&slots),
            Err(MISSING_WEEKS_ERROR.to_string())
        );

        slots.set_week(WEEK_SLOTS - 1, Some("w4.csv".to_string()));
        let (weeks, sales_plan) = prepare_submission(&slots).unwrap();
        assert_eq!(weeks, ["w1.csv", "w2.csv", "w3.csv", "w4.csv"]);
        assert_eq!(sales_plan, None);
    }

    #[test]
    fn test_submission_payload_carries_optional_sales_plan() {
        let mut slots = UploadSlots::<String>::default();
        for i in 0..WEEK_SLOTS {
            slots.set_week(i, Some(format!("w{}.csv", i + 1)));
        }
        slots.set_sales_plan(Some("plan.csv".to_string()));

        let (_, sales_plan) = prepare_submission(&slots).unwrap();
        assert_eq!(sales_plan, Some("plan.csv".to_string()));
    }

    #[test]
    fn test_request_state_projections() {
        assert!(RequestState::Submitting.is_submitting());
        assert!(!RequestState::Idle.is_submitting());
        assert_eq!(RequestState::Succeeded.error(), None);
        assert_eq!(
            RequestState::Failed(MISSING_WEEKS_ERROR.to_string()).error(),
            Some(MISSING_WEEKS_ERROR)
        );
    }
}
