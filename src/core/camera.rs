//! Karten-Kamera (Web-Mercator) für Pan, Zoom, Fit-Bounds und Pan-To.

use super::geo::{GeoBounds, GeoPoint};
use glam::DVec2;
use std::f64::consts::PI;

/// Kamera-Befehl, den der Kern an die Kartenoberfläche richtet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// Ausschnitt so wählen, dass `bounds` mit `padding_px` Rand sichtbar ist
    FitBounds { bounds: GeoBounds, padding_px: f64 },
    /// Auf einen Punkt zentrieren, Zoom beibehalten
    PanTo { target: GeoPoint, animate: bool },
}

/// Web-Mercator-Kamera mit Mittelpunkt und (gebrochenem) Zoom-Level.
#[derive(Debug, Clone)]
pub struct MapCamera {
    /// Mittelpunkt des Ausschnitts
    pub center: GeoPoint,
    /// Zoom-Level (0 = ganze Welt in einer Kachel)
    pub zoom: f64,
    /// Ziel einer laufenden Pan-Animation
    pan_target: Option<GeoPoint>,
}

impl MapCamera {
    /// Kachelgröße in Pixeln bei Zoom 0.
    pub const TILE_SIZE: f64 = 256.0;
    /// Minimaler Zoom-Level.
    pub const ZOOM_MIN: f64 = 1.0;
    /// Maximaler Zoom-Level (OSM-Kacheln).
    pub const ZOOM_MAX: f64 = 19.0;
    /// Breitengrad-Grenze der Mercator-Projektion.
    const MAX_LATITUDE: f64 = 85.051_128_779_806_6;
    /// Anteil der Reststrecke, der pro Animationsschritt (bei 60 Hz) zurückgelegt wird.
    const ANIMATION_RATE: f64 = 0.25;

    /// Erstellt eine Kamera auf Mittelpunkt und Zoom.
    pub fn new(center: GeoPoint, zoom: f64) -> Self {
        Self {
            center,
            zoom: zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX),
            pan_target: None,
        }
    }

    /// Projiziert einen Punkt in normierte Mercator-Koordinaten (0..1, y nach Süden).
    pub fn project(point: GeoPoint) -> DVec2 {
        let lat = point
            .lat
            .clamp(-Self::MAX_LATITUDE, Self::MAX_LATITUDE)
            .to_radians();
        let x = (point.lon + 180.0) / 360.0;
        let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0;
        DVec2::new(x, y)
    }

    /// Umkehrung von [`MapCamera::project`].
    pub fn unproject(world: DVec2) -> GeoPoint {
        let lon = world.x * 360.0 - 180.0;
        let n = PI * (1.0 - 2.0 * world.y);
        let lat = n.sinh().atan().to_degrees();
        GeoPoint::new(lat, lon)
    }

    /// Kantenlänge der Welt in Pixeln beim aktuellen Zoom.
    pub fn world_size_px(&self) -> f64 {
        Self::TILE_SIZE * 2f64.powf(self.zoom)
    }

    /// Geo-Koordinate → Bildschirm-Pixel (Ursprung oben links).
    pub fn geo_to_screen(&self, point: GeoPoint, viewport: DVec2) -> DVec2 {
        let scale = self.world_size_px();
        (Self::project(point) - Self::project(self.center)) * scale + viewport / 2.0
    }

    /// Bildschirm-Pixel → Geo-Koordinate.
    pub fn screen_to_geo(&self, screen: DVec2, viewport: DVec2) -> GeoPoint {
        let scale = self.world_size_px();
        Self::unproject((screen - viewport / 2.0) / scale + Self::project(self.center))
    }

    /// Verschiebt den Ausschnitt um ein Pixel-Delta (Drag-Richtung).
    pub fn pan_pixels(&mut self, delta_px: DVec2) {
        let scale = self.world_size_px();
        let world = Self::project(self.center) - delta_px / scale;
        self.center = Self::unproject(world.clamp(DVec2::ZERO, DVec2::ONE));
        self.pan_target = None;
    }

    /// Zoomt um `delta` Stufen, der Punkt unter `focus_px` bleibt stehen.
    pub fn zoom_towards(&mut self, delta: f64, focus_px: DVec2, viewport: DVec2) {
        let focus_geo = self.screen_to_geo(focus_px, viewport);
        self.zoom = (self.zoom + delta).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
        let drift = self.geo_to_screen(focus_geo, viewport) - focus_px;
        self.pan_pixels(-drift);
    }

    /// Zentriert auf `bounds` und wählt den größten ganzzahligen Zoom, bei dem
    /// die Box inklusive `padding_px` Rand auf jeder Seite in den Viewport passt.
    pub fn fit_bounds(&mut self, bounds: &GeoBounds, padding_px: f64, viewport: DVec2) {
        let nw = Self::project(bounds.north_west());
        let se = Self::project(bounds.south_east());
        let extent = (se - nw).abs() * Self::TILE_SIZE;
        let available = (viewport - DVec2::splat(2.0 * padding_px)).max(DVec2::ONE);

        let zoom = if extent.x <= f64::EPSILON && extent.y <= f64::EPSILON {
            Self::ZOOM_MAX
        } else {
            let ratio = (available / extent.max(DVec2::splat(f64::EPSILON))).min_element();
            ratio.log2().floor()
        };

        self.zoom = zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
        self.center = Self::unproject((nw + se) / 2.0);
        self.pan_target = None;
    }

    /// Zentriert auf `target` ohne Zoom-Änderung, optional animiert.
    pub fn pan_to(&mut self, target: GeoPoint, animate: bool) {
        if animate {
            self.pan_target = Some(target);
        } else {
            self.center = target;
            self.pan_target = None;
        }
    }

    /// Ziel der laufenden Pan-Animation.
    pub fn pan_target(&self) -> Option<GeoPoint> {
        self.pan_target
    }

    /// Führt einen Animationsschritt aus. Gibt `true` zurück, solange die Animation läuft.
    pub fn step_animation(&mut self, dt_seconds: f64) -> bool {
        let Some(target) = self.pan_target else {
            return false;
        };
        let from = Self::project(self.center);
        let to = Self::project(target);
        let remaining_px = (to - from) * self.world_size_px();
        if remaining_px.length() < 0.5 {
            self.center = target;
            self.pan_target = None;
            return false;
        }
        let t = (Self::ANIMATION_RATE * dt_seconds * 60.0).clamp(0.0, 1.0);
        self.center = Self::unproject(from.lerp(to, t));
        true
    }

    /// Führt einen Kamera-Befehl aus.
    pub fn apply(&mut self, command: &CameraCommand, viewport: DVec2) {
        match *command {
            CameraCommand::FitBounds { bounds, padding_px } => {
                self.fit_bounds(&bounds, padding_px, viewport)
            }
            CameraCommand::PanTo { target, animate } => self.pan_to(target, animate),
        }
    }
}

impl Default for MapCamera {
    fn default() -> Self {
        Self::new(GeoPoint::new(0.0, 0.0), 2.0)
    }
}
