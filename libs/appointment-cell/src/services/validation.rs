use shared_models::error::AppError;
use shared_models::records::{Appointment, AppointmentFilter};

const DATE_FORMAT_MESSAGE: &str = "Invalid date, please check the date format again and \
     make sure it follows the \"mm/dd/yyyy\" format";

const TIME_FORMAT_MESSAGE: &str = "Invalid time, please check the time format again and \
     make sure it follows the \"hh:mm\" format, is in military time, e.g. 18:30 for 6:30pm, \
     and is on a 15 minute interval, e.g. 08:15, 12:30";

/// Checks an "mm/dd/yyyy" date string: three components, month in [1,12],
/// day in [1,31]. Only the shape is checked - impossible calendar dates such
/// as 02/31/2024 pass, and the year is not inspected.
pub fn validate_date(date: &str) -> Result<(), AppError> {
    let format_error = || AppError::Format(DATE_FORMAT_MESSAGE.to_string());

    let parts: Vec<&str> = date.split('/').collect();
    if parts.len() != 3 {
        return Err(format_error());
    }

    let month: u32 = parts[0].parse().map_err(|_| format_error())?;
    let day: u32 = parts[1].parse().map_err(|_| format_error())?;

    if !(1..=12).contains(&month) {
        return Err(format_error());
    }
    if !(1..=31).contains(&day) {
        return Err(format_error());
    }

    Ok(())
}

/// Checks an "hh:mm" 24-hour time string with the minute on a 15 minute
/// interval.
pub fn validate_time(time: &str) -> Result<(), AppError> {
    let format_error = || AppError::Format(TIME_FORMAT_MESSAGE.to_string());

    let parts: Vec<&str> = time.split(':').collect();
    if parts.len() != 2 {
        return Err(format_error());
    }

    let hour: u32 = parts[0].parse().map_err(|_| format_error())?;
    let minute: u32 = parts[1].parse().map_err(|_| format_error())?;

    if hour > 24 {
        return Err(format_error());
    }
    if minute > 60 || minute % 15 != 0 {
        return Err(format_error());
    }

    Ok(())
}

/// Completes a partial appointment payload into a full record, failing on
/// the first absent or empty field in declaration order.
pub fn validate_required_fields(details: &AppointmentFilter) -> Result<Appointment, AppError> {
    let require = |name: &str, value: &Option<String>| -> Result<String, AppError> {
        value
            .as_deref()
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .ok_or_else(|| AppError::MissingField(name.to_string()))
    };

    Ok(Appointment {
        doctor: require("doctor", &details.doctor)?,
        patient: require("patient", &details.patient)?,
        kind: require("kind", &details.kind)?,
        date: require("date", &details.date)?,
        time: require("time", &details.time)?,
    })
}
