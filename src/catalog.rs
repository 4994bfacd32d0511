#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Track {
    pub title: &'static str,
    pub artist: &'static str,
    pub cover: &'static str,
}

pub const TRACKS: &[Track] = &[
    Track { title: "Midnight Drive", artist: "Neon Coast", cover: "/assets/covers/midnight-drive.jpg" },
    Track { title: "Paper Lanterns", artist: "Hollow Pines", cover: "/assets/covers/paper-lanterns.jpg" },
    Track { title: "Static Bloom", artist: "Vera Lune", cover: "/assets/covers/static-bloom.jpg" },
    Track { title: "Low Tide", artist: "The Quiet Hours", cover: "/assets/covers/low-tide.jpg" },
];
