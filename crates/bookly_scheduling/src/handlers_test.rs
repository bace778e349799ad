#[cfg(test)]
mod tests {
    use crate::handlers::{
        admin_login_handler, book_slot_handler, get_availability_handler, list_bookings_handler,
        set_overrides_handler, SchedulingState,
    };
    use crate::logic::{AvailabilityQuery, BookSlotRequest, LoginRequest, SetOverridesRequest};
    use axum::{
        extract::{Query, State},
        http::StatusCode,
        Json,
    };
    use bookly_common::{BooklyError, SlotOverrides};
    use bookly_config::AppConfig;
    use std::sync::Arc;

    fn state() -> Arc<SchedulingState> {
        Arc::new(SchedulingState::in_memory(&AppConfig::for_passcode("letmein")).unwrap())
    }

    fn booking() -> BookSlotRequest {
        BookSlotRequest {
            date: Some("2025-10-28".to_string()),
            time: Some("09:00 AM - 10:00 AM".to_string()),
            name: Some("A".to_string()),
            email: Some("a@x.com".to_string()),
            address: Some("1 Main St".to_string()),
            notes: None,
        }
    }

    #[test]
    fn test_state_requires_passcode() {
        let result = SchedulingState::in_memory(&AppConfig::default());
        assert!(matches!(result, Err(BooklyError::InternalError(_))));
    }

    #[tokio::test]
    async fn test_get_availability_handler() {
        let state = state();
        let Json(response) = get_availability_handler(
            State(state),
            Ok(Query(AvailabilityQuery {
                date: Some("2025-10-28".to_string()),
            })),
        )
        .await
        .unwrap();

        assert_eq!(response.date, "2025-10-28");
        assert_eq!(response.available_times.len(), 7);
    }

    #[tokio::test]
    async fn test_get_availability_handler_without_date() {
        let result =
            get_availability_handler(State(state()), Ok(Query(AvailabilityQuery::default()))).await;
        assert!(matches!(result, Err(BooklyError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_book_slot_handler_returns_created() {
        let state = state();
        let (status, Json(response)) = book_slot_handler(State(state.clone()), Ok(Json(booking())))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert!(response.success);

        let again = book_slot_handler(State(state), Ok(Json(booking()))).await;
        assert!(matches!(again, Err(BooklyError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_admin_login_handler() {
        let state = state();
        let Json(response) = admin_login_handler(
            State(state.clone()),
            Ok(Json(LoginRequest {
                passcode: Some("letmein".to_string()),
            })),
        )
        .await
        .unwrap();
        assert!(response.success);
        assert!(state.auth.authorize(Some(&response.token)).is_ok());

        let missing = admin_login_handler(State(state), Ok(Json(LoginRequest::default()))).await;
        assert!(matches!(missing, Err(BooklyError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_set_overrides_then_list_bookings() {
        let state = state();
        let Json(response) = set_overrides_handler(
            State(state.clone()),
            Ok(Json(SetOverridesRequest {
                date: Some("2025-10-28".to_string()),
                slots: Some(SlotOverrides::from([(
                    "10:00 AM - 11:00 AM".to_string(),
                    false,
                )])),
            })),
        )
        .await
        .unwrap();
        assert!(response.success);

        book_slot_handler(State(state.clone()), Ok(Json(booking())))
            .await
            .unwrap();
        let Json(bookings) = list_bookings_handler(State(state)).await.unwrap();
        assert_eq!(bookings["2025-10-28"].len(), 1);
    }
}
