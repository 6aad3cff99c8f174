//! Geographic view of a route: markers, the closed path and a center point.
//!
//! Rendering is left to the caller; [`RouteMap::to_geojson`] gives a
//! `FeatureCollection` any map viewer can draw.
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::allocation::DayAllocation;
use crate::catalog::Catalog;
use crate::geo::Coordinates;
use crate::numbers::usize_to_f64;
use crate::route::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Home,
    Stop,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub kind: MarkerKind,
    pub country: String,
    pub coordinates: Coordinates,
    /// Visit order, 1-based; absent for home.
    pub order: Option<usize>,
    pub days: Option<u32>,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteMap {
    pub center: Coordinates,
    pub markers: Vec<MapMarker>,
    pub path: Vec<Coordinates>,
    /// Length of the closed path in degree space.
    pub path_length: f64,
}

impl RouteMap {
    /// Build the map view, skipping any stop the catalog does not know.
    ///
    /// Returns `None` when no stop of the route can be located.
    #[must_use]
    pub fn from_route(
        catalog: &Catalog,
        route: &Route,
        allocation: &DayAllocation,
    ) -> Option<Self> {
        let path: Vec<Coordinates> = route
            .stops()
            .iter()
            .filter_map(|name| catalog.get(name).map(|record| record.coordinates))
            .collect();
        if path.is_empty() {
            return None;
        }
        let count = usize_to_f64(path.len());
        let center = Coordinates::new(
            path.iter().map(|c| c.lat).sum::<f64>() / count,
            path.iter().map(|c| c.lon).sum::<f64>() / count,
        );

        let mut markers = Vec::with_capacity(route.len().saturating_sub(1));
        if let Some(home) = catalog.get(route.home()) {
            markers.push(MapMarker {
                kind: MarkerKind::Home,
                country: home.name.clone(),
                coordinates: home.coordinates,
                order: None,
                days: None,
                label: format!("Start & End: {}", home.name),
            });
        }
        for (idx, name) in route.interior().iter().enumerate() {
            let Some(record) = catalog.get(name) else {
                continue;
            };
            let days = allocation.get(name);
            let order = idx + 1;
            let label = days.map_or_else(
                || format!("{order}. {name}"),
                |d| format!("{order}. {name} ({d} days)"),
            );
            markers.push(MapMarker {
                kind: MarkerKind::Stop,
                country: name.clone(),
                coordinates: record.coordinates,
                order: Some(order),
                days,
                label,
            });
        }

        Some(Self {
            center,
            markers,
            path,
            path_length: route.path_length(catalog),
        })
    }

    /// GeoJSON `FeatureCollection`: one point per marker and one line for the path.
    ///
    /// GeoJSON positions are `[lon, lat]`.
    #[must_use]
    pub fn to_geojson(&self) -> Value {
        let mut features: Vec<Value> = self
            .markers
            .iter()
            .map(|marker| {
                json!({
                    "type": "Feature",
                    "geometry": {
                        "type": "Point",
                        "coordinates": [marker.coordinates.lon, marker.coordinates.lat],
                    },
                    "properties": {
                        "kind": marker.kind,
                        "country": marker.country,
                        "order": marker.order,
                        "days": marker.days,
                        "label": marker.label,
                    },
                })
            })
            .collect();
        features.push(json!({
            "type": "Feature",
            "geometry": {
                "type": "LineString",
                "coordinates": self
                    .path
                    .iter()
                    .map(|c| [c.lon, c.lat])
                    .collect::<Vec<_>>(),
            },
            "properties": { "kind": "route", "length": self.path_length },
        }));
        json!({
            "type": "FeatureCollection",
            "features": features,
            "properties": { "center": [self.center.lon, self.center.lat] },
        })
    }
}
