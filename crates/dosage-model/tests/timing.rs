//! Serialization shape of each timing pattern.

use dosage_model::{
    DosageInstruction, DoseQuantity, DurationBound, NamedSlot, TimeSpecifier, TimingPattern,
    UnitOfTime, Weekday,
};
use serde_json::{Value, json};

fn repeat_of(timing: TimingPattern) -> Value {
    let instruction = DosageInstruction::scheduled(
        timing,
        DoseQuantity {
            value: 1.0,
            unit: "tablet".to_string(),
            code: Some("tab".to_string()),
        },
    );
    let value = serde_json::to_value(&instruction).expect("serialize instruction");
    value["timing"]["repeat"].clone()
}

#[test]
fn test_clock_times_with_bound() {
    let repeat = repeat_of(TimingPattern::ClockTimes {
        times: vec!["08:00:00".to_string(), "20:00:00".to_string()],
        bounds: DurationBound::new(2, UnitOfTime::Week),
    });
    assert_eq!(
        repeat,
        json!({
            "boundsDuration": {
                "value": 2,
                "unit": "week(s)",
                "system": "http://unitsofmeasure.org",
                "code": "wk"
            },
            "timeOfDay": ["08:00:00", "20:00:00"]
        })
    );
}

#[test]
fn test_weekdays_repeat_is_weekly() {
    let repeat = repeat_of(TimingPattern::Weekdays {
        days: vec![Weekday::Mon, Weekday::Fri],
        bounds: None,
    });
    assert_eq!(
        repeat,
        json!({
            "frequency": 2,
            "period": 1,
            "periodUnit": "wk",
            "dayOfWeek": ["mon", "fri"]
        })
    );
}

#[test]
fn test_interval_repeat() {
    let repeat = repeat_of(TimingPattern::Interval {
        frequency: 3,
        period: 1,
        period_unit: UnitOfTime::Day,
        bounds: None,
    });
    assert_eq!(
        repeat,
        json!({ "frequency": 3, "period": 1, "periodUnit": "d" })
    );
}

#[test]
fn test_interval_at_clock_time() {
    let repeat = repeat_of(TimingPattern::IntervalAtTime {
        period: 2,
        period_unit: UnitOfTime::Day,
        at: TimeSpecifier::Clock("07:30:00".to_string()),
        bounds: None,
    });
    assert_eq!(
        repeat,
        json!({
            "frequency": 1,
            "period": 2,
            "periodUnit": "d",
            "timeOfDay": ["07:30:00"]
        })
    );
}

#[test]
fn test_weekdays_at_slot() {
    let repeat = repeat_of(TimingPattern::WeekdaysAtTime {
        days: vec![Weekday::Tue, Weekday::Thu, Weekday::Sat],
        at: TimeSpecifier::Slot(NamedSlot::Night),
        bounds: DurationBound::new(1, UnitOfTime::Month),
    });
    assert_eq!(
        repeat,
        json!({
            "boundsDuration": {
                "value": 1,
                "unit": "month(s)",
                "system": "http://unitsofmeasure.org",
                "code": "mo"
            },
            "frequency": 3,
            "period": 1,
            "periodUnit": "wk",
            "dayOfWeek": ["tue", "thu", "sat"],
            "when": ["NIGHT"]
        })
    );
}
