use trip_planner_backend::message::{Accommodation, Budget, TripRequest};
use trip_planner_backend::services::template::render_basic_itinerary;

fn trip(duration: u8, budget: Budget, accommodation: Accommodation) -> TripRequest {
    TripRequest {
        location: "Thiruvananthapuram".to_string(),
        duration,
        budget,
        interests: "culture, adventure, food".to_string(),
        accommodation,
        additional_notes: None,
    }
}

#[test]
fn test_template_contains_literal_fields_for_all_inputs() {
    let budgets = [Budget::Low, Budget::Moderate, Budget::High];
    let accommodations = [
        Accommodation::Luxury,
        Accommodation::Budget,
        Accommodation::MidRange,
        Accommodation::UniqueStays,
    ];

    for duration in 1..=15 {
        for budget in &budgets {
            for accommodation in &accommodations {
                let output =
                    render_basic_itinerary(&trip(duration, budget.clone(), accommodation.clone()));

                assert!(!output.is_empty());
                assert!(output.contains("Thiruvananthapuram"));
                assert!(output.contains(&duration.to_string()));
                assert!(output.contains(&budget.to_string()));
                assert!(output.contains(&accommodation.to_string()));
                assert!(output.contains("culture, adventure, food"));
            }
        }
    }
}

#[test]
fn test_single_day_trip_has_no_malformed_day_range() {
    let output = render_basic_itinerary(&trip(1, Budget::Low, Accommodation::Budget));
    assert!(!output.contains("Days 2-0"));
    assert!(!output.contains("Day 2-0"));
    assert!(output.contains("Day 1"));
}

#[test]
fn test_two_day_trip_has_no_malformed_day_range() {
    let output = render_basic_itinerary(&trip(2, Budget::Low, Accommodation::Budget));
    assert!(!output.contains("Days 2-1"));
    assert!(output.contains("**Day 2: Departure**"));
}

#[test]
fn test_custom_values_fall_back_to_generic_advice() {
    let output = render_basic_itinerary(&trip(
        4,
        Budget::Custom("Shoestring".to_string()),
        Accommodation::Custom("Treehouse".to_string()),
    ));
    assert!(output.contains("Plan according to your budget preferences."));
    assert!(output.contains("Choose based on your comfort preferences."));
    // Custom values still render verbatim in the overview
    assert!(output.contains("Shoestring"));
    assert!(output.contains("Treehouse"));
}

#[test]
fn test_missing_notes_render_default_sentence() {
    let output = render_basic_itinerary(&trip(4, Budget::Moderate, Accommodation::MidRange));
    assert!(output.contains("No specific requirements noted."));
}

#[test]
fn test_template_is_deterministic() {
    let request = trip(7, Budget::High, Accommodation::Luxury);
    assert_eq!(
        render_basic_itinerary(&request),
        render_basic_itinerary(&request)
    );
}
