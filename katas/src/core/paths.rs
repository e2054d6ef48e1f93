//! Longest common directory of `/`-separated file paths.

/// Return the longest leading directory shared by every path, ending in `/`.
///
/// The final segment of each path is a file name and never part of the
/// result, so a single path yields its containing directory. Returns an
/// empty string when the paths share no leading segment (including an
/// absolute path mixed with a relative one) or when `paths` is empty.
pub fn common_directory_path<S: AsRef<str>>(paths: &[S]) -> String {
    let segmented: Vec<Vec<&str>> = paths
        .iter()
        .map(|path| path.as_ref().split('/').collect())
        .collect();

    let Some((reference, others)) = segmented.split_first() else {
        return String::new();
    };

    let directory_depth = segmented
        .iter()
        .map(|segments| segments.len() - 1)
        .min()
        .unwrap_or(0);

    let common = others.iter().fold(directory_depth, |limit, segments| {
        reference
            .iter()
            .zip(segments)
            .take(limit)
            .take_while(|(left, right)| left == right)
            .count()
    });

    if common == 0 {
        return String::new();
    }
    let mut directory = reference[..common].join("/");
    directory.push('/');
    directory
}
