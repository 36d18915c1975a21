/// Levenshtein edit distance with unit cost for insertion, deletion and
/// substitution. Characters are compared as Unicode scalar values.
pub fn distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rows of the (n+1) x (m+1) grid are enough.
    let mut prev: Vec<usize> = (0..=m).collect();
    let mut curr = vec![0usize; m + 1];

    for j in 1..=n {
        curr[0] = j;
        for i in 1..=m {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[i] = (curr[i - 1] + 1)
                .min(prev[i] + 1)
                .min(prev[i - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[m]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_are_zero() {
        for s in ["", "a", "archer", "smith-steeb", "veteran's"] {
            assert_eq!(distance(s, s), 0);
        }
    }

    #[test]
    fn empty_side_is_length_of_other() {
        assert_eq!(distance("", ""), 0);
        assert_eq!(distance("", "abc"), 3);
        assert_eq!(distance("tower", ""), 5);
        assert_eq!(distance("", "café"), 4);
    }

    #[test]
    fn classic_pairs() {
        assert_eq!(distance("kitten", "sitting"), 3);
        assert_eq!(distance("flaw", "lawn"), 2);
        assert_eq!(distance("hall", "hal"), 1);
        assert_eq!(distance("morrill", "morrison"), 3);
    }

    #[test]
    fn symmetric() {
        let pairs = [
            ("kitten", "sitting"),
            ("stradley", "park"),
            ("", "house"),
            ("paterson", "patterson"),
            ("tenth", "10th"),
        ];
        for (a, b) in pairs {
            assert_eq!(distance(a, b), distance(b, a), "{a} vs {b}");
        }
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(distance("é", "e"), 1);
        assert_eq!(distance("résidence", "residence"), 1);
    }
}
