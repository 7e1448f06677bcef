// Sheet - Fixed-capacity pagination of the note sequence
// A presentation concern: the scheduler always sees the flat sequence

use crate::model::note::Note;

/// Number of note slots on one sheet
pub const SHEET_CAPACITY: usize = 10;

/// Split a flat note sequence into fixed-size pages
///
/// Pages preserve input order; the final page is right-padded with copies of
/// `filler` so every page has exactly `page_size` slots. An empty input yields
/// a single page of fillers (the grid always shows at least one sheet).
///
/// `page_size` must be > 0; violating it is a caller bug, not a runtime
/// condition.
pub fn paginate(notes: &[Note], page_size: usize, filler: Note) -> Vec<Vec<Note>> {
    assert!(page_size > 0, "Page size must be > 0");

    let mut pages: Vec<Vec<Note>> = notes
        .chunks(page_size)
        .map(|chunk| chunk.to_vec())
        .collect();

    if pages.is_empty() {
        pages.push(Vec::new());
    }

    if let Some(last) = pages.last_mut() {
        last.resize(page_size, filler);
    }

    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::key::Key;

    #[test]
    fn test_exact_multiple_has_no_padding() {
        let notes = vec![Note::pitched(Key::C); 6];
        let pages = paginate(&notes, 3, Note::rest());

        assert_eq!(pages.len(), 2);
        assert!(pages.iter().all(|page| page.len() == 3));
        assert!(pages.iter().flatten().all(|note| *note == Note::pitched(Key::C)));
    }

    #[test]
    fn test_final_page_is_padded() {
        let notes = vec![
            Note::pitched(Key::C),
            Note::pitched(Key::D),
            Note::pitched(Key::E),
        ];
        let pages = paginate(&notes, 2, Note::rest());

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0], vec![Note::pitched(Key::C), Note::pitched(Key::D)]);
        assert_eq!(pages[1], vec![Note::pitched(Key::E), Note::rest()]);
    }

    #[test]
    fn test_empty_input_yields_one_filler_page() {
        let pages = paginate(&[], 4, Note::rest());

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0], vec![Note::rest(); 4]);
    }

    #[test]
    fn test_concatenation_reproduces_input() {
        let notes: Vec<Note> = [Key::C, Key::D, Key::E, Key::F, Key::G, Key::A, Key::B]
            .into_iter()
            .map(Note::pitched)
            .collect();

        let pages = paginate(&notes, SHEET_CAPACITY, Note::rest());
        let flattened: Vec<Note> = pages.into_iter().flatten().collect();

        assert_eq!(&flattened[..notes.len()], &notes[..]);
        assert!(flattened[notes.len()..].iter().all(|note| *note == Note::rest()));
    }

    #[test]
    #[should_panic(expected = "Page size must be > 0")]
    fn test_zero_page_size() {
        paginate(&[Note::rest()], 0, Note::rest());
    }
}
