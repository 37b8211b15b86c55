use rbl_check_application::use_cases::QueryZonesUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub query_zones: Arc<QueryZonesUseCase>,
}
