
/// Copies at most `out.len() - 1` bytes of `src` into `out` and terminates them with a `0` byte.
///
/// Returns the number of content bytes written. A zero-length `out` receives nothing.
pub(crate) fn copy_truncated(src: &[u8], out: &mut [u8]) -> usize {
  let Some(limit) = out.len().checked_sub(1) else {
    return 0;
  };
  let copied = src.len().min(limit);
  out[..copied].copy_from_slice(&src[..copied]);
  out[copied] = 0;
  copied
}
