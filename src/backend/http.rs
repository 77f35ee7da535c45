//! HTTP/JSON-Anbindung an den Zonen-Service.

use super::{CreateZoneRequest, ZoneBackend, ZoneListing};
use crate::core::{ZoneRecord, ZoneType};
use anyhow::Context;
use reqwest::blocking::{Client, Response};
use reqwest::Url;
use std::time::Duration;

/// Zonen-Backend über HTTP (`list_zones`, `create_zone`, `edit_zone`, …).
pub struct HttpZoneBackend {
    client: Client,
    base_url: Url,
}

impl HttpZoneBackend {
    const TIMEOUT: Duration = Duration::from_secs(30);

    /// Erstellt das Backend für eine Basis-URL.
    ///
    /// Eine ungültige URL ist ein Konfigurationsfehler und bricht den Start ab.
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let base_url = Self::parse_base_url(base_url)?;
        let client = Client::builder()
            .timeout(Self::TIMEOUT)
            .build()
            .context("HTTP-Client konnte nicht erstellt werden")?;
        Ok(Self { client, base_url })
    }

    /// Prüft und normalisiert die Basis-URL (abschließender `/` für `Url::join`).
    pub fn parse_base_url(base_url: &str) -> anyhow::Result<Url> {
        let mut url =
            Url::parse(base_url).with_context(|| format!("Ungültige Backend-URL: {base_url}"))?;
        if url.cannot_be_a_base() {
            anyhow::bail!("Backend-URL kann keine Basis sein: {base_url}");
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    /// Verwendete Basis-URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> anyhow::Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("Endpunkt {path} nicht auflösbar"))
    }

    /// Wandelt Nicht-2xx-Antworten in Fehler mit Server-Meldung um.
    fn check(response: Response, what: &str) -> anyhow::Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().unwrap_or_default();
        anyhow::bail!("{what} fehlgeschlagen ({status}): {}", server_message(&body))
    }
}

/// Extrahiert `detail.message` aus einer Fehlerantwort, sonst den Rohtext.
fn server_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .pointer("/detail/message")
                .or_else(|| value.get("detail"))
                .and_then(|v| v.as_str().map(str::to_owned))
        })
        .unwrap_or_else(|| body.trim().to_string())
}

impl ZoneBackend for HttpZoneBackend {
    fn list_zones(&self) -> anyhow::Result<Vec<ZoneRecord>> {
        let response = self
            .client
            .get(self.endpoint("list_zones")?)
            .send()
            .context("list_zones nicht erreichbar")?;
        let listing: ZoneListing = Self::check(response, "list_zones")?
            .json()
            .context("list_zones: Antwort nicht lesbar")?;
        Ok(listing.into_records())
    }

    fn create_zone(&self, request: &CreateZoneRequest) -> anyhow::Result<ZoneRecord> {
        let response = self
            .client
            .post(self.endpoint("create_zone")?)
            .json(request)
            .send()
            .context("create_zone nicht erreichbar")?;
        Self::check(response, "create_zone")?
            .json()
            .context("create_zone: Antwort nicht lesbar")
    }

    fn edit_zone(
        &self,
        zone_id: &str,
        zone_name: &str,
        zone_type: ZoneType,
    ) -> anyhow::Result<ZoneRecord> {
        let response = self
            .client
            .put(self.endpoint("edit_zone")?)
            .query(&[
                ("zone_id", zone_id),
                ("zone_name", zone_name),
                ("zone_type", zone_type.as_str()),
            ])
            .send()
            .context("edit_zone nicht erreichbar")?;
        Self::check(response, "edit_zone")?
            .json()
            .context("edit_zone: Antwort nicht lesbar")
    }

    fn delete_zone(&self, zone_id: &str) -> anyhow::Result<()> {
        let response = self
            .client
            .delete(self.endpoint("delete_zone")?)
            .query(&[("zone_id", zone_id)])
            .send()
            .context("delete_zone nicht erreichbar")?;
        Self::check(response, "delete_zone")?;
        Ok(())
    }

    fn refresh_zone(&self, zone_id: &str) -> anyhow::Result<ZoneRecord> {
        let response = self
            .client
            .put(self.endpoint("refresh_zone")?)
            .query(&[("zone_id", zone_id)])
            .send()
            .context("refresh_zone nicht erreichbar")?;
        Self::check(response, "refresh_zone")?
            .json()
            .context("refresh_zone: Antwort nicht lesbar")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let url = HttpZoneBackend::parse_base_url("http://localhost:8001/api").expect("gültig");
        assert_eq!(url.as_str(), "http://localhost:8001/api/");
        assert_eq!(
            url.join("list_zones").expect("join").as_str(),
            "http://localhost:8001/api/list_zones"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(HttpZoneBackend::parse_base_url("not a url").is_err());
        assert!(HttpZoneBackend::parse_base_url("mailto:zones@example.com").is_err());
    }

    #[test]
    fn test_server_message_prefers_detail() {
        assert_eq!(
            server_message(r#"{"detail": {"status": "error", "message": "Zone not found"}}"#),
            "Zone not found"
        );
        assert_eq!(server_message(r#"{"detail": "Not Found"}"#), "Not Found");
        assert_eq!(server_message("bad gateway\n"), "bad gateway");
    }
}
