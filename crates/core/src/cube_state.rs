//! Cube state module - the displayed coloring of all six faces
//!
//! The state is only ever changed wholesale per face: a solver snapshot
//! (decoded into a [`CubePatch`]) replaces every face it carries, and a
//! reset replaces everything with [`CubeState::initial`]. Individual
//! stickers are never edited in place.

use crate::types::{Face, Sticker, FACE_COUNT, FACE_STICKERS};

/// The nine stickers of one face, row-major.
pub type FaceStickers = [Sticker; FACE_STICKERS];

/// Nine unknown stickers, used when a face cannot be resolved.
pub const UNKNOWN_FACE: FaceStickers = [None; FACE_STICKERS];

/// Coloring of all six faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CubeState {
    faces: [FaceStickers; FACE_COUNT],
}

impl CubeState {
    /// The canonical solved coloring: each face uniformly its home color
    pub fn initial() -> Self {
        let mut faces = [UNKNOWN_FACE; FACE_COUNT];
        for face in Face::ALL {
            faces[face.index()] = [Some(face.home_color()); FACE_STICKERS];
        }
        Self { faces }
    }

    /// Install every face present in `patch`; absent faces keep their value.
    pub fn replace(&mut self, patch: &CubePatch) {
        for face in Face::ALL {
            if let Some(stickers) = patch.get(face) {
                self.faces[face.index()] = *stickers;
            }
        }
    }

    pub fn face(&self, face: Face) -> &FaceStickers {
        &self.faces[face.index()]
    }

    /// Render lookup by wire face key.
    ///
    /// Unknown keys resolve to nine unknown stickers instead of failing, so a
    /// renderer can follow whatever face keys a payload carries.
    pub fn stickers_by_name(&self, name: &str) -> FaceStickers {
        Face::from_str(name)
            .map(|face| *self.face(face))
            .unwrap_or(UNKNOWN_FACE)
    }

    /// True when every sticker carries a palette color.
    pub fn is_valid(&self) -> bool {
        self.faces.iter().flatten().all(Option::is_some)
    }

    /// True when each face is a single known color.
    pub fn is_uniform(&self) -> bool {
        self.faces
            .iter()
            .all(|f| f[0].is_some() && f.iter().all(|s| *s == f[0]))
    }
}

impl Default for CubeState {
    fn default() -> Self {
        Self::initial()
    }
}

/// A possibly partial set of faces, as decoded from a solver snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CubePatch {
    faces: [Option<FaceStickers>; FACE_COUNT],
}

impl CubePatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// A patch covering every face of `state`.
    pub fn full(state: &CubeState) -> Self {
        let mut patch = Self::new();
        for face in Face::ALL {
            patch.set(face, *state.face(face));
        }
        patch
    }

    pub fn with_face(mut self, face: Face, stickers: FaceStickers) -> Self {
        self.set(face, stickers);
        self
    }

    pub fn set(&mut self, face: Face, stickers: FaceStickers) {
        self.faces[face.index()] = Some(stickers);
    }

    pub fn get(&self, face: Face) -> Option<&FaceStickers> {
        self.faces[face.index()].as_ref()
    }

    pub fn face_count(&self) -> usize {
        self.faces.iter().filter(|f| f.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.face_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    #[test]
    fn initial_cube_is_solved_and_valid() {
        let cube = CubeState::initial();
        assert!(cube.is_valid());
        assert!(cube.is_uniform());
        assert_eq!(cube.face(Face::Front), &[Some(Color::Green); 9]);
    }

    #[test]
    fn replace_keeps_absent_faces() {
        let mut cube = CubeState::initial();
        let patch = CubePatch::new().with_face(Face::Up, [Some(Color::Red); 9]);
        cube.replace(&patch);

        assert_eq!(cube.face(Face::Up), &[Some(Color::Red); 9]);
        assert_eq!(cube.face(Face::Down), &[Some(Color::Yellow); 9]);
    }

    #[test]
    fn unknown_stickers_are_tolerated_but_invalid() {
        let mut cube = CubeState::initial();
        let mut stickers = [Some(Color::Blue); 9];
        stickers[4] = None;
        cube.replace(&CubePatch::new().with_face(Face::Back, stickers));

        assert!(!cube.is_valid());
        assert_eq!(cube.face(Face::Back)[4], None);
    }

    #[test]
    fn lookup_by_unknown_name_yields_fallback() {
        let cube = CubeState::initial();
        assert_eq!(cube.stickers_by_name("X"), UNKNOWN_FACE);
        assert_eq!(cube.stickers_by_name("L"), [Some(Color::Orange); 9]);
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut cube = CubeState::initial();
        cube.replace(&CubePatch::new());
        assert_eq!(cube, CubeState::initial());
        assert!(CubePatch::new().is_empty());
        assert_eq!(CubePatch::full(&cube).face_count(), 6);
    }
}
