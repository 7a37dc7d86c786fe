// src/app/poster.rs
use eframe::egui::ColorImage;
use tracing::warn;

use super::tmdb::MovieApi;
use super::types::PosterView;

/// Detail-pane poster box; decoded posters are shrunk to fit inside it.
pub const POSTER_MAX_W: u32 = 220;
pub const POSTER_MAX_H: u32 = 330;

/// Decode image bytes into an RGBA `ColorImage` no bigger than the poster box.
pub fn decode_poster(bytes: &[u8]) -> Result<ColorImage, String> {
    let img = image::load_from_memory(bytes).map_err(|e| format!("decode poster: {e}"))?;
    // shrink only; smaller posters keep their size
    let img = if img.width() > POSTER_MAX_W || img.height() > POSTER_MAX_H {
        img.thumbnail(POSTER_MAX_W, POSTER_MAX_H)
    } else {
        img
    };
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    if w == 0 || h == 0 {
        return Err("decode poster: empty image".into());
    }
    Ok(ColorImage::from_rgba_unmultiplied(
        [w as usize, h as usize],
        rgba.as_raw(),
    ))
}

/// Fetch + decode, synchronously. Any failure degrades to `Unavailable`.
pub fn load_poster(api: &dyn MovieApi, poster_path: Option<&str>) -> PosterView {
    let Some(path) = poster_path else {
        return PosterView::Absent;
    };

    let result = api
        .poster(path)
        .map_err(|e| e.to_string())
        .and_then(|bytes| decode_poster(&bytes));

    match result {
        Ok(img) => PosterView::Loaded(img),
        Err(e) => {
            warn!("poster {path} unavailable: {e}");
            PosterView::Unavailable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testutil::{png_bytes, FakeApi};
    use crate::error::FetchError;

    #[test]
    fn large_poster_is_shrunk_to_fit() {
        let img = decode_poster(&png_bytes(342, 513)).unwrap();
        assert!(img.size[0] <= POSTER_MAX_W as usize);
        assert!(img.size[1] <= POSTER_MAX_H as usize);
        assert!(img.size[1] > 300);
    }

    #[test]
    fn small_poster_is_not_enlarged() {
        let img = decode_poster(&png_bytes(20, 30)).unwrap();
        assert_eq!(img.size, [20, 30]);
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        assert!(decode_poster(b"<html>not an image</html>").is_err());
    }

    #[test]
    fn no_path_means_no_request() {
        let api = FakeApi::new();
        assert_eq!(load_poster(&api, None), PosterView::Absent);
        assert_eq!(api.poster_calls(), 0);
    }

    #[test]
    fn network_failure_degrades_to_placeholder() {
        let api = FakeApi::new().with_poster(Err(FetchError::Timeout("15s".into())));
        assert_eq!(load_poster(&api, Some("/p.jpg")), PosterView::Unavailable);
    }

    #[test]
    fn decode_failure_degrades_to_placeholder() {
        let api = FakeApi::new().with_poster(Ok(vec![0, 1, 2, 3]));
        assert_eq!(load_poster(&api, Some("/p.jpg")), PosterView::Unavailable);
    }

    #[test]
    fn good_bytes_load() {
        let api = FakeApi::new().with_poster(Ok(png_bytes(20, 30)));
        assert!(matches!(load_poster(&api, Some("/p.jpg")), PosterView::Loaded(_)));
    }
}
