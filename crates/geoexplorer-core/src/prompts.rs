//! Prompt text sent to the text generator.

use geoexplorer_protocols::LatLng;

/// Prompt asking for a short description of the location at `point`.
pub fn describe(point: LatLng, address: Option<&str>) -> String {
    let mut prompt = format!(
        "Provide a brief but informative description (2-3 paragraphs) about the location at latitude: {}, longitude: {}.",
        point.lat, point.lng
    );
    if let Some(address) = address {
        prompt.push_str(&format!(" The address is: {}.", address));
    }
    prompt.push_str(
        " Include notable landmarks, historical significance, cultural relevance, or interesting facts if applicable. \
         Also briefly mention the current typical weather conditions for this time of year.",
    );
    prompt
}

/// Prompt answering `message` in the context of the map centred at `point`.
pub fn chat(message: &str, point: LatLng, address: Option<&str>) -> String {
    let mut prompt = String::from("You are a helpful location assistant for GeoExplorer AI.\n\n");
    prompt.push_str("The user is currently looking at a map centered at:\n");
    prompt.push_str(&format!("- Latitude: {}\n- Longitude: {}\n", point.lat, point.lng));
    if let Some(address) = address {
        prompt.push_str(&format!("- Address: {}\n", address));
    }
    prompt.push_str(&format!("\nThe user's question is: {}\n\n", message));
    prompt.push_str(
        "Provide a helpful, informative response about this location relevant to their question.\n\
         Include geographical, historical, or cultural information that would be useful.\n\
         Keep your response concise but informative (2-3 paragraphs maximum).",
    );
    prompt
}
