//! Resort feed schema and field mapping
//!
//! This module mirrors the XML layout of the NordicFrance resort feed and
//! maps it into our record types. The feed schema is loose and evolves, so
//! every leaf deserializes as an optional string and coercion is permissive:
//! a missing node becomes an empty string, a missing or non-numeric value
//! becomes zero. Only a document that fails XML deserialization altogether
//! is an error.

use chrono::{DateTime, Utc};
use quick_xml::de::from_str;
use quick_xml::DeError;
use serde::Deserialize;

use super::{Resort, SnowReport, Trail, WeatherReport};

/// Which half-day of a weather block to read
///
/// The feed stores morning and afternoon readings side by side inside one
/// day block, as `_matin`- and `_am`-suffixed siblings. Both the today and
/// the tomorrow block carry both suffix sets, so the same selection applies
/// to either day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
}

/// Parses a raw feed document
///
/// Fails only when the document is not well-formed XML or its structure
/// cannot be deserialized at all; absent nodes are tolerated everywhere.
pub(crate) fn parse(document: &str) -> Result<FeedDocument, DeError> {
    from_str(document)
}

/// Maps a parsed feed into a fully populated `Resort`
///
/// The timestamp is supplied by the caller so that mapping stays a pure
/// function of the document.
pub(crate) fn map_resort(feed: &FeedDocument, fetched_at: DateTime<Utc>) -> Resort {
    let station = &feed.station;
    let infos = &station.infos;

    Resort {
        name: text(&infos.nom),
        opening: text(&infos.ouverture),
        closing: text(&infos.fermeture),
        altitude_low: number(&infos.altitude_bas),
        altitude_high: number(&infos.altitude_haut),
        main_image_url: text(&infos.media.image_principale.url),
        weather_today_morning: map_weather(&station.meteo.meteo_du_jour, TimeOfDay::Morning),
        weather_today_afternoon: map_weather(&station.meteo.meteo_du_jour, TimeOfDay::Afternoon),
        weather_tomorrow_morning: map_weather(&station.meteo.meteo_demain, TimeOfDay::Morning),
        weather_tomorrow_afternoon: map_weather(&station.meteo.meteo_demain, TimeOfDay::Afternoon),
        snow_today: map_snow(&station.enneigement.enneigement_du_jour),
        snow_tomorrow: map_snow(&station.enneigement.enneigement_demain),
        trails: station
            .pistes_itineraires
            .piste
            .iter()
            .map(map_trail)
            .collect(),
        fetched_at,
    }
}

/// Maps one half-day of a weather block
///
/// An explicit two-branch selection over the suffixed siblings: `Morning`
/// reads the `_matin` children, `Afternoon` the `_am` children. The date is
/// shared by both halves of the block.
fn map_weather(block: &DayWeather, time_of_day: TimeOfDay) -> WeatherReport {
    let (conditions, temp_min, temp_max, wind) = match time_of_day {
        TimeOfDay::Morning => (
            &block.temps_matin,
            &block.temperature.temp_min_matin,
            &block.temperature.temp_max_matin,
            &block.vent.vent_matin,
        ),
        TimeOfDay::Afternoon => (
            &block.temps_am,
            &block.temperature.temp_min_am,
            &block.temperature.temp_max_am,
            &block.vent.vent_am,
        ),
    };

    WeatherReport {
        date: text(&block.date),
        conditions: text(&conditions.libelle),
        pictogram: text(&conditions.picto),
        temp_min: number(temp_min),
        temp_max: number(temp_max),
        wind: text(wind),
    }
}

/// Maps one day's snow block
fn map_snow(block: &DaySnow) -> SnowReport {
    SnowReport {
        date: text(&block.date),
        avalanche_risk: text(&block.risque_avalanche),
        quality_low: text(&block.neige.qualite_neige_bas),
        quality_high: text(&block.neige.qualite_neige_haut),
        depth_low: number(&block.neige.hauteur_neige_bas),
        depth_high: number(&block.neige.hauteur_neige_haut),
        fresh_low: number(&block.neige.chute_neige_bas),
        fresh_high: number(&block.neige.chute_neige_haut),
    }
}

/// Maps one trail element
fn map_trail(node: &TrailNode) -> Trail {
    Trail {
        date: text(&node.date),
        name: text(&node.nom),
        status: text(&node.ouverture),
        km_total: number(&node.km_total),
        practices: text(&node.pratiques),
        difficulty: text(&node.difficulte),
        comment: text(&node.commentaire),
        gps_coordinates: text(&node.coord_gps),
    }
}

/// Coerces an optional text node to an owned string, empty when absent
fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Coerces an optional text node to an integer, zero when absent or
/// non-numeric
fn number(value: &Option<String>) -> i32 {
    value
        .as_deref()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0)
}

// Raw deserialization targets mirroring the feed layout. Every container
// defaults so a document may omit whole sections without failing.

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct FeedDocument {
    station: Station,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Station {
    infos: Infos,
    meteo: Meteo,
    enneigement: Enneigement,
    pistes_itineraires: PistesItineraires,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Infos {
    nom: Option<String>,
    ouverture: Option<String>,
    fermeture: Option<String>,
    altitude_bas: Option<String>,
    altitude_haut: Option<String>,
    media: Media,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Media {
    image_principale: MainImage,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MainImage {
    #[serde(rename = "@url")]
    url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Meteo {
    meteo_du_jour: DayWeather,
    meteo_demain: DayWeather,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DayWeather {
    date: Option<String>,
    temps_matin: WeatherConditions,
    temps_am: WeatherConditions,
    temperature: Temperatures,
    vent: Winds,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WeatherConditions {
    libelle: Option<String>,
    picto: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Temperatures {
    temp_min_matin: Option<String>,
    temp_max_matin: Option<String>,
    temp_min_am: Option<String>,
    temp_max_am: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Winds {
    vent_matin: Option<String>,
    vent_am: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Enneigement {
    enneigement_du_jour: DaySnow,
    enneigement_demain: DaySnow,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DaySnow {
    date: Option<String>,
    risque_avalanche: Option<String>,
    neige: SnowDepths,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SnowDepths {
    qualite_neige_bas: Option<String>,
    qualite_neige_haut: Option<String>,
    hauteur_neige_bas: Option<String>,
    hauteur_neige_haut: Option<String>,
    chute_neige_bas: Option<String>,
    chute_neige_haut: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PistesItineraires {
    piste: Vec<TrailNode>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TrailNode {
    date: Option<String>,
    nom: Option<String>,
    ouverture: Option<String>,
    km_total: Option<String>,
    pratiques: Option<String>,
    difficulte: Option<String>,
    commentaire: Option<String>,
    #[serde(rename = "coord_GPS")]
    coord_gps: Option<String>,
}
