// src/app/testutil.rs — scripted MovieApi for unit tests
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::tmdb::{MovieApi, RawRecommendation, SearchResult};
use crate::error::FetchError;

type Scripted<T> = Mutex<VecDeque<Result<T, FetchError>>>;

/// Answers are popped in the order they were queued; an empty queue answers
/// with an empty list (search/recommendations) or a connection error (poster).
#[derive(Default)]
pub struct FakeApi {
    search: Scripted<Vec<SearchResult>>,
    recs: Scripted<Vec<RawRecommendation>>,
    posters: Scripted<Vec<u8>>,
    search_calls: AtomicUsize,
    rec_calls: AtomicUsize,
    poster_calls: AtomicUsize,
    rec_ids: Mutex<Vec<u64>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(self, r: Result<Vec<(u64, &str)>, FetchError>) -> Self {
        let r = r.map(|v| {
            v.into_iter()
                .map(|(id, title)| SearchResult { id, title: title.to_string() })
                .collect()
        });
        self.search.lock().unwrap().push_back(r);
        self
    }

    pub fn with_recs(self, r: Result<Vec<RawRecommendation>, FetchError>) -> Self {
        self.recs.lock().unwrap().push_back(r);
        self
    }

    pub fn with_poster(self, r: Result<Vec<u8>, FetchError>) -> Self {
        self.posters.lock().unwrap().push_back(r);
        self
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn recommendation_calls(&self) -> usize {
        self.rec_calls.load(Ordering::SeqCst)
    }

    pub fn poster_calls(&self) -> usize {
        self.poster_calls.load(Ordering::SeqCst)
    }

    pub fn recommended_ids(&self) -> Vec<u64> {
        self.rec_ids.lock().unwrap().clone()
    }
}

impl MovieApi for FakeApi {
    fn search_movies(&self, _query: &str) -> Result<Vec<SearchResult>, FetchError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.search.lock().unwrap().pop_front().unwrap_or(Ok(Vec::new()))
    }

    fn recommendations(&self, movie_id: u64) -> Result<Vec<RawRecommendation>, FetchError> {
        self.rec_calls.fetch_add(1, Ordering::SeqCst);
        self.rec_ids.lock().unwrap().push(movie_id);
        self.recs.lock().unwrap().pop_front().unwrap_or(Ok(Vec::new()))
    }

    fn poster(&self, _poster_path: &str) -> Result<Vec<u8>, FetchError> {
        self.poster_calls.fetch_add(1, Ordering::SeqCst);
        self.posters
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Connection("no poster scripted".into())))
    }
}

pub fn raw(title: &str, rating: f64) -> RawRecommendation {
    RawRecommendation {
        title: Some(title.to_string()),
        overview: Some(format!("About {title}.")),
        poster_path: None,
        vote_average: Some(rating),
        release_date: Some("2001-05-04".to_string()),
    }
}

/// A small valid PNG, 2:3 portrait.
pub fn png_bytes(w: u32, h: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba([200, 30, 30, 255]));
    let mut out = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut std::io::Cursor::new(&mut out), image::ImageFormat::Png)
        .unwrap();
    out
}
