//! Local fallback itinerary template.
//!
//! Pure and total: never touches the network, never fails for any valid
//! [`TripRequest`], and always produces the same output for the same input.

use crate::message::{Accommodation, Budget, TripRequest};

/// Render a generic day-by-day itinerary without calling the API.
pub fn render_basic_itinerary(trip: &TripRequest) -> String {
    format!(
        "## 📝 Basic Travel Itinerary for {location}\n\n\
         ### 🗓️ {duration}-Day Trip Overview\n\n\
         **Destination:** {location}\n\
         **Budget Level:** {budget}\n\
         **Interests:** {interests}\n\
         **Accommodation:** {accommodation}\n\n\
         ### 📋 Daily Structure\n\n\
         {daily_structure}\n\
         ### 💡 Recommendations\n\n\
         **Budget Tips:**\n\
         {budget_tip}\n\n\
         **Accommodation:**\n\
         {accommodation_tip}\n\n\
         **Based on Your Interests ({interests}):**\n\
         - Research specific attractions related to your interests\n\
         - Look for local experiences that match your preferences\n\
         - Consider guided tours or workshops\n\n\
         **Additional Notes:**\n\
         {notes}\n\n\
         ### 🔍 Next Steps\n\
         1. Research specific attractions in {location}\n\
         2. Book accommodations in advance\n\
         3. Check local weather and pack accordingly\n\
         4. Research local customs and etiquette\n\
         5. Plan transportation within the city\n\n\
         *This is a basic itinerary template. For more detailed AI-generated \
         recommendations, please try again when the API is available.*",
        location = trip.location,
        duration = trip.duration,
        budget = trip.budget,
        interests = trip.interests,
        accommodation = trip.accommodation,
        daily_structure = daily_structure(trip.duration),
        budget_tip = budget_tip(&trip.budget),
        accommodation_tip = accommodation_tip(&trip.accommodation),
        notes = trip.notes_or_default(),
    )
}

/// Three-phase day plan: arrival, main activities, departure.
///
/// One- and two-day trips collapse the middle block so the output never
/// contains a degenerate range like "Days 2-0".
fn daily_structure(duration: u8) -> String {
    if duration == 1 {
        return "**Day 1: Arrival & Departure**\n\
                - **Morning:** Arrive and drop your bags at your accommodation\n\
                - **Afternoon:** Explore the city center and main sights\n\
                - **Evening:** Enjoy a local dinner before heading out\n"
            .to_string();
    }

    let mut days = String::from(
        "**Day 1: Arrival & Orientation**\n\
         - **Morning:** Arrive and check into your accommodation\n\
         - **Afternoon:** Explore the city center and get oriented\n\
         - **Evening:** Enjoy a local dinner and rest\n\n",
    );

    if duration >= 3 {
        let heading = if duration == 3 {
            "**Day 2: Main Activities**".to_string()
        } else {
            format!("**Days 2-{}: Main Activities**", duration - 1)
        };
        days.push_str(&format!(
            "{heading}\n\
             - **Morning:** Visit main attractions and landmarks\n\
             - **Afternoon:** Cultural experiences or outdoor activities\n\
             - **Evening:** Local dining and entertainment\n\n"
        ));
    }

    days.push_str(&format!(
        "**Day {duration}: Departure**\n\
         - **Morning:** Final exploration or souvenir shopping\n\
         - **Afternoon:** Check out and depart\n"
    ));
    days
}

fn budget_tip(budget: &Budget) -> &'static str {
    match budget {
        Budget::Low => {
            "Focus on free attractions, public transport, and budget accommodations like hostels or guesthouses."
        }
        Budget::Moderate => {
            "Mix of paid and free activities, mid-range hotels, and local restaurants."
        }
        Budget::High => "Premium experiences, luxury accommodations, and fine dining options.",
        Budget::Custom(_) => "Plan according to your budget preferences.",
    }
}

fn accommodation_tip(accommodation: &Accommodation) -> &'static str {
    match accommodation {
        Accommodation::Luxury => {
            "Consider 5-star hotels, boutique resorts, or luxury vacation rentals."
        }
        Accommodation::Budget => "Look for hostels, budget hotels, or affordable guesthouses.",
        Accommodation::MidRange => "Choose 3-4 star hotels or comfortable vacation rentals.",
        Accommodation::UniqueStays => {
            "Consider boutique hotels, eco-lodges, or themed accommodations."
        }
        Accommodation::Custom(_) => "Choose based on your comfort preferences.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_block_collapses_for_short_trips() {
        assert!(!daily_structure(1).contains("Days 2-0"));
        assert!(!daily_structure(2).contains("Days 2-1"));
        assert!(daily_structure(3).contains("**Day 2: Main Activities**"));
        assert!(daily_structure(5).contains("**Days 2-4: Main Activities**"));
    }
}
