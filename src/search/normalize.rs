//! Maps a raw text-search place onto the `Restaurant` shape.
//!
//! | field                 | source                                   | default |
//! |-----------------------|------------------------------------------|---------|
//! | formatted_address     | formattedAddress, then shortFormattedAddress | `""` |
//! | rating                | rating                                   | `0.0`   |
//! | location              | location                                 | `0, 0`  |
//! | price_level           | priceLevel                               | `""`    |
//! | website_uri           | websiteUri                               | `""`    |
//! | google_maps_uri       | googleMapsUri                            | `""`    |
//! | open_now              | currentOpeningHours.openNow              | `false` |
//! | weekday_descriptions  | currentOpeningHours.weekdayDescriptions  | `[]`    |
//! | next_close_time       | currentOpeningHours.nextCloseTime        | `""`    |
//! | would_try             | never read from upstream                 | `false` |

use crate::models::photo::PlacePhoto;
use crate::models::place::{LatLng, RawPlace, UpstreamOpeningHours};
use crate::models::restaurant::{CurrentOpeningHours, Location, Restaurant};
use crate::models::review::ReviewsBundle;

pub fn assemble_restaurant(
    place: RawPlace,
    photos: Vec<PlacePhoto>,
    reviews: ReviewsBundle,
) -> Restaurant {
    Restaurant {
        formatted_address: pick_address(place.formatted_address, place.short_formatted_address),
        name: place.display_name.text,
        rating: place.rating.unwrap_or_default(),
        photos,
        location: place.location.map(to_location).unwrap_or_default(),
        place_id: place.id,
        would_try: false,
        reviews,
        price_level: place.price_level.unwrap_or_default(),
        website_uri: place.website_uri.unwrap_or_default(),
        google_maps_uri: place.google_maps_uri.unwrap_or_default(),
        current_opening_hours: opening_hours(place.current_opening_hours),
    }
}

fn pick_address(formatted: Option<String>, short: Option<String>) -> String {
    formatted
        .filter(|address| !address.is_empty())
        .or(short)
        .unwrap_or_default()
}

fn to_location(latlng: LatLng) -> Location {
    Location {
        lat: latlng.latitude,
        lng: latlng.longitude,
    }
}

fn opening_hours(hours: Option<UpstreamOpeningHours>) -> CurrentOpeningHours {
    let hours = hours.unwrap_or_default();
    CurrentOpeningHours {
        open_now: hours.open_now.unwrap_or(false),
        weekday_descriptions: hours.weekday_descriptions.unwrap_or_default(),
        next_close_time: hours.next_close_time.unwrap_or_default(),
    }
}
