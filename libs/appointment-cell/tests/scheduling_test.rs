use std::sync::Arc;

use assert_matches::assert_matches;

use appointment_cell::services::scheduling::AppointmentSchedulingService;
use shared_models::error::AppError;
use shared_models::records::AppointmentFilter;
use shared_utils::test_utils::{appointment_details, InMemoryScheduleStore};

fn service(store: &Arc<InMemoryScheduleStore>) -> AppointmentSchedulingService {
    AppointmentSchedulingService::new(store.clone())
}

#[tokio::test]
async fn booking_requires_a_known_doctor() {
    let store = Arc::new(InMemoryScheduleStore::new());

    let err = service(&store)
        .create_appointment(appointment_details("Strange", "03/14/2025", "09:15"))
        .await
        .unwrap_err();

    assert_matches!(err, AppError::NotFound(name) if name == "Strange");
    assert_eq!(store.appointment_count(), 0);
}

#[tokio::test]
async fn a_slot_holds_at_most_three_appointments() {
    let store = Arc::new(InMemoryScheduleStore::with_doctors(&["Strange", "Palmer"]));
    let scheduling = service(&store);

    // The capacity rule keys on (date, time) alone, so bookings with
    // different doctors still count against the same slot.
    for (doctor, patient) in [("Strange", "Chen"), ("Strange", "Okafor"), ("Palmer", "Silva")] {
        let mut details = appointment_details(doctor, "03/14/2025", "09:15");
        details.patient = Some(patient.to_string());
        scheduling.create_appointment(details).await.unwrap();
    }
    assert_eq!(store.appointment_count(), 3);

    let err = scheduling
        .create_appointment(appointment_details("Strange", "03/14/2025", "09:15"))
        .await
        .unwrap_err();
    assert_matches!(err, AppError::Capacity(_));
    assert_eq!(store.appointment_count(), 3);

    // A different time on the same date is a different slot.
    scheduling
        .create_appointment(appointment_details("Strange", "03/14/2025", "09:30"))
        .await
        .unwrap();
}

#[tokio::test]
async fn booking_rejects_missing_fields_before_any_lookup() {
    let store = Arc::new(InMemoryScheduleStore::with_doctors(&["Strange"]));

    let mut details = appointment_details("Strange", "03/14/2025", "09:15");
    details.kind = None;

    let err = service(&store).create_appointment(details).await.unwrap_err();
    assert_matches!(err, AppError::MissingField(field) if field == "kind");
    assert_eq!(store.appointment_count(), 0);
}

#[tokio::test]
async fn booking_rejects_bad_time_and_date_formats() {
    let store = Arc::new(InMemoryScheduleStore::with_doctors(&["Strange"]));
    let scheduling = service(&store);

    let err = scheduling
        .create_appointment(appointment_details("Strange", "03/14/2025", "09:07"))
        .await
        .unwrap_err();
    assert_matches!(err, AppError::Format(_));

    let err = scheduling
        .create_appointment(appointment_details("Strange", "2025-03-14", "09:15"))
        .await
        .unwrap_err();
    assert_matches!(err, AppError::Format(_));

    // Time is validated before date, so a payload with both broken reports
    // the time problem.
    let err = scheduling
        .create_appointment(appointment_details("Strange", "2025-03-14", "09:07"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Invalid time"));

    assert_eq!(store.appointment_count(), 0);
}

#[tokio::test]
async fn cancellation_requires_every_field() {
    let store = Arc::new(InMemoryScheduleStore::with_doctors(&["Strange"]));
    let scheduling = service(&store);

    scheduling
        .create_appointment(appointment_details("Strange", "03/14/2025", "09:15"))
        .await
        .unwrap();

    // A partial payload is rejected outright instead of matching (and
    // possibly deleting) more than one record.
    let details = AppointmentFilter {
        doctor: Some("Strange".to_string()),
        date: Some("03/14/2025".to_string()),
        time: Some("09:15".to_string()),
        ..Default::default()
    };
    let err = scheduling.delete_appointment(details).await.unwrap_err();
    assert_matches!(err, AppError::MissingField(field) if field == "patient");
    assert_eq!(store.appointment_count(), 1);
}

#[tokio::test]
async fn cancellation_deletes_only_the_exact_record() {
    let store = Arc::new(InMemoryScheduleStore::with_doctors(&["Strange"]));
    let scheduling = service(&store);

    let mut first = appointment_details("Strange", "03/14/2025", "09:15");
    first.patient = Some("Chen".to_string());
    let mut second = appointment_details("Strange", "03/14/2025", "09:15");
    second.patient = Some("Okafor".to_string());

    scheduling.create_appointment(first.clone()).await.unwrap();
    scheduling.create_appointment(second).await.unwrap();

    scheduling.delete_appointment(first).await.unwrap();

    let remaining = scheduling
        .get_appointments(AppointmentFilter::default())
        .await
        .unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].patient, "Okafor");
}

#[tokio::test]
async fn filters_match_on_every_set_field() {
    let store = Arc::new(InMemoryScheduleStore::with_doctors(&["Strange", "Palmer"]));
    let scheduling = service(&store);

    scheduling
        .create_appointment(appointment_details("Strange", "03/14/2025", "09:15"))
        .await
        .unwrap();
    scheduling
        .create_appointment(appointment_details("Palmer", "03/14/2025", "10:00"))
        .await
        .unwrap();

    let all = scheduling
        .get_appointments(AppointmentFilter::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 2);

    let filter = AppointmentFilter {
        doctor: Some("Palmer".to_string()),
        ..Default::default()
    };
    let palmers = scheduling.get_appointments(filter).await.unwrap();
    assert_eq!(palmers.len(), 1);
    assert_eq!(palmers[0].time, "10:00");
}
