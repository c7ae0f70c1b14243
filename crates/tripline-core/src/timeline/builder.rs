//! Day schedule construction.
//!
//! Pure and deterministic: events in, day schedules out. Start time is the
//! tie-break key throughout.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use crate::model::{EventData, EventType, TravelEvent};
use crate::timeline::item::{DaySchedule, TimelineItem};

/// Build ordered per-day schedules from an unordered event set.
///
/// Within each day, items are arranged in five fixed buckets: breakfast
/// hints, checkout hints, chronological events and connections, hotel
/// check-ins, then staying hints. The bucket order makes a day read
/// "wake up, leave old hotel, do things, arrive at new hotel, settle in"
/// independent of the literal clock times, which are often noisy.
pub fn build_schedule(events: &[TravelEvent]) -> Vec<DaySchedule> {
    let mut keyed: Vec<(DateTime<Utc>, TimelineItem)> = Vec::new();

    for event in events {
        keyed.push((
            event.start_time,
            TimelineItem::Event {
                event: event.clone(),
            },
        ));
    }

    keyed.extend(synthesize_connections(events));

    for event in events {
        bracket_hotel_stay(event, &mut keyed);
    }

    // Stable sort: same-instant items keep insertion order
    keyed.sort_by_key(|(key, _)| *key);

    let mut days: BTreeMap<NaiveDate, Vec<TimelineItem>> = BTreeMap::new();
    for (key, item) in keyed {
        days.entry(key.date_naive()).or_default().push(item);
    }

    days.into_iter()
        .map(|(date, items)| DaySchedule {
            date,
            items: arrange_day(items),
        })
        .collect()
}

/// Synthesize a connection item for each adjacent pair of transport-class
/// events separated by a gap of under 24 hours.
///
/// Only the transport-class subsequence counts as adjacent: a hotel stay
/// between two flights must not suppress the flight-to-flight indicator.
fn synthesize_connections(events: &[TravelEvent]) -> Vec<(DateTime<Utc>, TimelineItem)> {
    let mut transport: Vec<&TravelEvent> = events
        .iter()
        .filter(|e| e.event_type.is_transport_class())
        .collect();
    transport.sort_by_key(|e| e.start_time);

    let mut out = Vec::new();
    for pair in transport.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let Some(a_end) = a.end_time else {
            continue;
        };
        let layover = b.start_time - a_end;
        if layover <= Duration::zero() || layover >= Duration::hours(24) {
            continue;
        }

        let location_label = match &a.data {
            EventData::Flight(f) if a.event_type == EventType::Flight => {
                format!("at {}", f.arrival_airport)
            }
            _ => "Layover".to_string(),
        };

        // Key one second past A's end so the item sorts between A and B
        out.push((
            a_end + Duration::seconds(1),
            TimelineItem::Connection {
                duration_label: duration_label(layover),
                location_label,
            },
        ));
    }
    out
}

fn duration_label(gap: Duration) -> String {
    let hours = gap.num_hours();
    let minutes = gap.num_minutes() % 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// Emit breakfast, checkout and staying hints for a hotel event spanning
/// several days. A hotel missing its check-out time generates nothing.
fn bracket_hotel_stay(event: &TravelEvent, keyed: &mut Vec<(DateTime<Utc>, TimelineItem)>) {
    if event.event_type != EventType::Hotel {
        return;
    }
    let EventData::Hotel(hotel) = &event.data else {
        return;
    };
    let Some(end_time) = event.end_time else {
        return;
    };

    let check_in_day = event.start_time.date_naive();
    let check_out_day = end_time.date_naive();
    let breakfast = hotel.is_breakfast_included.unwrap_or(false);

    // Mornings after the check-in night, through the check-out day
    for day in check_in_day
        .iter_days()
        .skip(1)
        .take_while(|d| *d <= check_out_day)
    {
        if breakfast {
            keyed.push((
                midnight(day),
                TimelineItem::Breakfast {
                    hotel_name: hotel.hotel_name.clone(),
                },
            ));
        }
        if day == check_out_day && check_out_day > check_in_day {
            keyed.push((
                end_time,
                TimelineItem::CheckoutHint {
                    title: event.display_title(),
                },
            ));
        }
    }

    // Nights spent at the hotel, minus the check-in day itself: the
    // check-in event item already communicates occupancy that day
    for day in check_in_day
        .iter_days()
        .skip(1)
        .take_while(|d| *d < check_out_day)
    {
        keyed.push((
            midnight(day),
            TimelineItem::Staying {
                title: event.display_title(),
            },
        ));
    }
}

fn midnight(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

/// Partition one day's chronologically-ordered items into the fixed
/// bucket order and concatenate.
fn arrange_day(items: Vec<TimelineItem>) -> Vec<TimelineItem> {
    let mut breakfasts = Vec::new();
    let mut checkouts = Vec::new();
    let mut remaining = Vec::new();
    let mut check_ins = Vec::new();
    let mut stayings = Vec::new();

    for item in items {
        match &item {
            TimelineItem::Breakfast { .. } => breakfasts.push(item),
            TimelineItem::CheckoutHint { .. } => checkouts.push(item),
            TimelineItem::Event { event } if event.event_type == EventType::Hotel => {
                check_ins.push(item)
            }
            TimelineItem::Event { .. } | TimelineItem::Connection { .. } => remaining.push(item),
            TimelineItem::Staying { .. } => stayings.push(item),
        }
    }

    let mut out = breakfasts;
    out.append(&mut checkouts);
    out.append(&mut remaining);
    out.append(&mut check_ins);
    out.append(&mut stayings);
    out
}
