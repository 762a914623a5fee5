use crate::catalog::album::{seed_albums, Album};

/// Ordered in-memory album collection.
/// Wrapped in Arc<RwLock<AlbumStore>> by AppState; records are only ever
/// appended, never updated or removed.
#[derive(Debug, Default)]
pub struct AlbumStore {
    albums: Vec<Album>,
}

impl AlbumStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the three seed records.
    pub fn seeded() -> Self {
        Self::with_albums(seed_albums())
    }

    pub fn with_albums(albums: Vec<Album>) -> Self {
        AlbumStore { albums }
    }

    /// All albums in insertion order.
    pub fn list(&self) -> &[Album] {
        &self.albums
    }

    /// First album whose id matches exactly. Linear scan, so with duplicate
    /// ids the earliest insert wins.
    pub fn find(&self, id: &str) -> Option<&Album> {
        self.albums.iter().find(|a| a.id == id)
    }

    /// Append to the end of the collection and return the new length.
    pub fn append(&mut self, album: Album) -> usize {
        self.albums.push(album);
        self.albums.len()
    }

    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }
}
