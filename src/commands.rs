//! One-shot CLI commands. Each goes through the relay the way a surface
//! would and prints the result.

use geoexplorer_protocols::{mask_key, Credentials, LatLng, RelayRequest};

use crate::app::App;
use crate::cli::{LocationAction, SettingsAction};

type CmdResult = Result<(), Box<dyn std::error::Error>>;

pub(crate) async fn describe(app: &App, fake_maps: bool, lat: f64, lng: f64) -> CmdResult {
    let mut surface = app.surface(fake_maps).await?;
    let outcome = surface.handle_map_click(LatLng::new(lat, lng)).await;

    println!("Address: {}", surface.address_display());
    println!();
    println!("{}", surface.info_window().content());
    outcome.map_err(Into::into)
}

pub(crate) async fn chat(
    app: &App,
    fake_maps: bool,
    message: &str,
    lat: Option<f64>,
    lng: Option<f64>,
) -> CmdResult {
    let mut surface = app.surface(fake_maps).await?;
    let center = surface.map().center();
    surface.map_mut().set_center(LatLng::new(
        lat.unwrap_or(center.lat),
        lng.unwrap_or(center.lng),
    ));

    let outcome = surface.submit_chat(message).await;
    if let Some(reply) = surface.chat().last() {
        println!("{}", reply.content);
    }
    outcome.map_err(Into::into)
}

pub(crate) async fn locations(app: &App, fake_maps: bool, action: LocationAction) -> CmdResult {
    match action {
        LocationAction::List { format } => {
            let locations = app
                .client
                .send(RelayRequest::GetSavedLocations)
                .await?
                .into_locations()?;

            if format == "json" {
                println!("{}", serde_json::to_string_pretty(&locations)?);
            } else if locations.is_empty() {
                println!("No saved locations yet.");
            } else {
                for (index, location) in locations.iter().enumerate() {
                    println!(
                        "{:>3}  {:<32} {:>11.6} {:>12.6}  {}",
                        index,
                        location.title,
                        location.lat,
                        location.lng,
                        location.timestamp.format("%Y-%m-%d")
                    );
                }
            }
        }
        LocationAction::Save { lat, lng, title } => {
            let mut surface = app.surface(fake_maps).await?;
            let saved = save_at(&mut surface, LatLng::new(lat, lng), title.as_deref()).await?;
            println!("Saved '{}' ({} saved locations)", saved.0, saved.1);
        }
        LocationAction::Delete { index } => {
            // Deleting never geocodes.
            let mut surface = app.surface(true).await?;
            let remaining = surface.delete_saved_location(index).await?.len();
            println!("Deleted location {} ({} remaining)", index, remaining);
        }
    }
    Ok(())
}

async fn save_at(
    surface: &mut geoexplorer_core::Surface,
    point: LatLng,
    title: Option<&str>,
) -> Result<(String, usize), Box<dyn std::error::Error>> {
    surface.select_point(point)?;
    let saved = surface.save_current_location(title).await?;
    let last = saved
        .last()
        .map(|l| l.title.clone())
        .unwrap_or_default();
    Ok((last, saved.len()))
}

pub(crate) async fn settings(app: &App, action: SettingsAction) -> CmdResult {
    let settings = app.relay.settings();
    match action {
        SettingsAction::Show => {
            let credentials = settings.load().await?;
            println!("Google Maps API key: {}", mask(credentials.mapping_key()));
            println!("Gemini API key:      {}", mask(credentials.text_gen_key()));
        }
        SettingsAction::Set {
            maps_key,
            gemini_key,
        } => {
            settings.save(Credentials::new(maps_key, gemini_key)).await?;
            println!("Settings saved successfully!");
        }
    }
    Ok(())
}

pub(crate) async fn geocode(app: &App, fake_maps: bool, address: &str) -> CmdResult {
    let maps = app.maps(fake_maps).await?;
    let point = maps.geocode(address).await?;
    println!("{}", point);
    Ok(())
}

pub(crate) async fn reverse_geocode(app: &App, fake_maps: bool, lat: f64, lng: f64) -> CmdResult {
    let maps = app.maps(fake_maps).await?;
    let address = maps.reverse_geocode(LatLng::new(lat, lng)).await?;
    println!("{}", address);
    Ok(())
}

fn mask(key: Option<&str>) -> String {
    key.map(mask_key).unwrap_or_else(|| "(not set)".to_string())
}
