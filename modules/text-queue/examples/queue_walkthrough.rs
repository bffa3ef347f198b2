use fraktor_text_queue_rs::{TextQueue, handle};

fn values(queue: Option<&TextQueue>) -> Vec<&str> {
  queue.map(TextQueue::iter).into_iter().flatten().collect()
}

fn main() {
  let mut queue = handle::new();
  for word in ["pear", "apple", "fig"] {
    assert!(handle::insert_tail(queue.as_mut(), word));
  }
  assert!(handle::insert_head(queue.as_mut(), "kiwi"));
  println!("inserted: {:?}", values(queue.as_ref()));

  handle::sort(queue.as_mut());
  println!("sorted:   {:?}", values(queue.as_ref()));

  handle::reverse(queue.as_mut());
  println!("reversed: {:?}", values(queue.as_ref()));

  // 3 バイトのバッファには 2 文字と終端だけが入る
  let mut out = [0_u8; 3];
  while handle::remove_head(queue.as_mut(), Some(&mut out)) {
    let end = out.iter().position(|&b| b == 0).unwrap_or(out.len());
    println!("removed:  {}", String::from_utf8_lossy(&out[..end]));
  }
  println!("size after drain: {}", handle::size(queue.as_ref()));

  handle::destroy(queue);
}
