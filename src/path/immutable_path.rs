//! Persistent, structurally shared traversal history.
//!
//! A [Path] is a singly linked chain of segments, newest first. Segments are reference
//! counted and never change after construction, so any number of traversers may branch off
//! a shared prefix and keep extending it independently.

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::de::Deserializer;
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use super::{Labels, Pop, Popped};
use crate::error::{PathError, PathResult};

/// Immutable history of objects and the labels of the steps that produced them.
///
/// The empty path is the terminal sentinel: every path ends in it and it only supports
/// [Path::extend].
pub struct Path<T> {
  head: Option<Arc<Segment<T>>>,
}

struct Segment<T> {
  previous: Path<T>,
  current: T,
  labels: Labels,
  size: usize,
}

/// Walks segments from the head back to the sentinel.
struct Segments<'a, T> {
  next: Option<&'a Segment<T>>,
}

impl<'a, T> Iterator for Segments<'a, T> {
  type Item = &'a Segment<T>;

  fn next(&mut self) -> Option<Self::Item> {
    let segment = self.next?;
    self.next = segment.previous.head.as_deref();
    Some(segment)
  }
}

impl<T> Path<T> {
  /// The empty terminal path.
  pub const fn empty() -> Self {
    Path { head: None }
  }

  fn segment(previous: Path<T>, current: T, labels: Labels) -> Self {
    let size = previous.size() + 1;
    Path {
      head: Some(Arc::new(Segment {
        previous,
        current,
        labels,
        size,
      })),
    }
  }

  fn segments(&self) -> Segments<'_, T> {
    Segments {
      next: self.head.as_deref(),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.head.is_none()
  }

  pub fn size(&self) -> usize {
    self.head.as_ref().map_or(0, |segment| segment.size)
  }

  /// Appends `object` produced by a step labeled `labels`. `self` is left untouched.
  pub fn extend(&self, object: T, labels: impl Into<Labels>) -> Path<T> {
    Path::segment(self.clone(), object, labels.into())
  }

  /// The path without its newest segment, or `None` for the empty path.
  pub fn previous(&self) -> Option<&Path<T>> {
    self.head.as_ref().map(|segment| &segment.previous)
  }

  /// True when both paths are the same chain in memory.
  pub fn ptr_eq(&self, other: &Path<T>) -> bool {
    match (&self.head, &other.head) {
      (Some(a), Some(b)) => Arc::ptr_eq(a, b),
      (None, None) => true,
      _ => false,
    }
  }

  /// Newest object.
  pub fn head(&self) -> Option<&T> {
    self.head.as_ref().map(|segment| &segment.current)
  }

  /// Labels of the newest segment.
  pub fn head_labels(&self) -> Option<&Labels> {
    self.head.as_ref().map(|segment| &segment.labels)
  }

  /// Object at `index`, where 0 is the oldest.
  pub fn get(&self, index: usize) -> PathResult<&T> {
    let size = self.size();
    if index >= size {
      return Err(PathError::IndexOutOfBounds { index, size });
    }
    self
      .segments()
      .nth(size - 1 - index)
      .map(|segment| &segment.current)
      .ok_or(PathError::IndexOutOfBounds { index, size })
  }

  /// Object of the oldest segment carrying `label`.
  pub fn get_first(&self, label: &str) -> PathResult<&T> {
    self
      .segments()
      .filter(|segment| segment.labels.contains(label))
      .last()
      .map(|segment| &segment.current)
      .ok_or_else(|| PathError::LabelNotFound {
        label: label.to_string(),
      })
  }

  /// Object of the newest segment carrying `label`.
  pub fn get_last(&self, label: &str) -> PathResult<&T> {
    self
      .segments()
      .find(|segment| segment.labels.contains(label))
      .map(|segment| &segment.current)
      .ok_or_else(|| PathError::LabelNotFound {
        label: label.to_string(),
      })
  }

  /// Objects of every segment carrying `label`, oldest to newest. Never fails.
  pub fn get_all(&self, label: &str) -> Vec<&T> {
    let mut objects: Vec<&T> = self
      .segments()
      .filter(|segment| segment.labels.contains(label))
      .map(|segment| &segment.current)
      .collect();
    objects.reverse();
    objects
  }

  /// Label-scoped lookup dispatching on `pop`.
  pub fn get_by_label(&self, label: &str, pop: Pop) -> PathResult<Popped<'_, T>> {
    match pop {
      Pop::First => self.get_first(label).map(Popped::One),
      Pop::Last => self.get_last(label).map(Popped::One),
      Pop::All => Ok(Popped::All(self.get_all(label))),
    }
  }

  pub fn has_label(&self, label: &str) -> bool {
    self
      .segments()
      .any(|segment| segment.labels.contains(label))
  }

  /// Objects oldest to newest, freshly allocated on every call.
  pub fn objects(&self) -> Vec<&T> {
    self.iter().map(|(object, _)| object).collect()
  }

  /// Label sets oldest to newest, freshly allocated on every call.
  pub fn labels(&self) -> Vec<&Labels> {
    self.iter().map(|(_, labels)| labels).collect()
  }

  /// (object, labels) pairs oldest to newest.
  pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&T, &Labels)> {
    let mut segments: Vec<&Segment<T>> = self.segments().collect();
    segments.reverse();
    segments
      .into_iter()
      .map(|segment| (&segment.current, &segment.labels))
  }

  /// True when no object occurs twice.
  pub fn is_simple(&self) -> bool
  where
    T: Eq + Hash,
  {
    let mut seen = HashSet::with_capacity(self.size());
    self.segments().all(|segment| seen.insert(&segment.current))
  }
}

impl<T: Clone> Path<T> {
  /// Adds `labels` to the newest segment, keeping its object and history.
  pub fn extend_labels(&self, labels: impl Into<Labels>) -> PathResult<Path<T>> {
    let Some(head) = &self.head else {
      return Err(PathError::InvalidOperation {
        operation: "extend_labels",
        reason: "the empty path has no segment to label".to_string(),
      });
    };
    Ok(Path::segment(
      head.previous.clone(),
      head.current.clone(),
      head.labels.union(&labels.into()),
    ))
  }

  /// Removes every segment whose labels intersect `labels`.
  ///
  /// Segments older than the oldest removed segment are shared with `self`; only the
  /// segments above it are rebuilt. A segment that matches is removed whole, including any
  /// other labels it carries.
  pub fn retract(&self, labels: &Labels) -> PathResult<Path<T>> {
    if self.is_empty() {
      return Err(PathError::InvalidOperation {
        operation: "retract",
        reason: "the empty path has no segments to retract".to_string(),
      });
    }

    let chain: Vec<&Segment<T>> = self.segments().collect();
    let Some(oldest_dropped) = chain
      .iter()
      .rposition(|segment| segment.labels.intersects(labels))
    else {
      return Ok(self.clone());
    };

    let mut rebuilt = chain[oldest_dropped].previous.clone();
    for segment in chain[..oldest_dropped].iter().rev() {
      if segment.labels.intersects(labels) {
        continue;
      }
      rebuilt = Path::segment(rebuilt, segment.current.clone(), segment.labels.clone());
    }
    Ok(rebuilt)
  }
}

impl<T> Clone for Path<T> {
  fn clone(&self) -> Self {
    Path {
      head: self.head.clone(),
    }
  }
}

impl<T> Default for Path<T> {
  fn default() -> Self {
    Path::empty()
  }
}

// Unlinks uniquely owned segments one at a time so long chains do not recurse on drop.
impl<T> Drop for Path<T> {
  fn drop(&mut self) {
    let mut next = self.head.take();
    while let Some(segment) = next {
      match Arc::try_unwrap(segment) {
        Ok(mut owned) => next = owned.previous.head.take(),
        Err(_) => break,
      }
    }
  }
}

impl<T: PartialEq> PartialEq for Path<T> {
  fn eq(&self, other: &Self) -> bool {
    self.size() == other.size()
      && self
        .segments()
        .zip(other.segments())
        .all(|(a, b)| a.current == b.current && a.labels == b.labels)
  }
}

impl<T: Eq> Eq for Path<T> {}

impl<T: Hash> Hash for Path<T> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.objects().hash(state);
  }
}

impl<T: fmt::Display> fmt::Display for Path<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[")?;
    for (i, object) in self.objects().into_iter().enumerate() {
      if i > 0 {
        write!(f, ", ")?;
      }
      write!(f, "{}", object)?;
    }
    write!(f, "]")
  }
}

impl<T: fmt::Debug> fmt::Debug for Path<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

#[derive(Serialize)]
struct EntryRef<'a, T> {
  object: &'a T,
  labels: &'a Labels,
}

#[derive(Deserialize)]
struct Entry<T> {
  object: T,
  #[serde(default)]
  labels: Labels,
}

impl<T: Serialize> Serialize for Path<T> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(self.size()))?;
    for (object, labels) in self.iter() {
      seq.serialize_element(&EntryRef { object, labels })?;
    }
    seq.end()
  }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Path<T> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let entries = Vec::<Entry<T>>::deserialize(deserializer)?;
    Ok(
      entries
        .into_iter()
        .fold(Path::empty(), |path, entry| path.extend(entry.object, entry.labels)),
    )
  }
}
