// Dweve HEDL - Hierarchical Entity Data Language
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Nested JSON document generator.
//!
//! Every object carries a string, a number and a boolean, followed by
//! `arrays` five-element integer arrays and `objects` nested children. Each
//! child gets half the depth, half the arrays and half the children of its
//! parent. Depth zero produces `null`.

use super::SizeClass;
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::fmt::Write;

/// Elements per generated array.
pub const ARRAY_LEN: usize = 5;

/// Shape parameters for one level of the generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonShape {
    /// Remaining nesting depth; zero emits `null`.
    pub depth: usize,
    /// Number of arrays per object.
    pub arrays: usize,
    /// Number of nested objects per object.
    pub objects: usize,
}

impl JsonShape {
    /// Creates a shape.
    pub const fn new(depth: usize, arrays: usize, objects: usize) -> Self {
        Self {
            depth,
            arrays,
            objects,
        }
    }

    /// Shape used for the children of an object with this shape.
    pub fn child(&self) -> Self {
        Self::new(self.depth / 2, self.arrays / 2, self.objects / 2)
    }
}

/// Generates a nested JSON document for a size class.
///
/// # Example
///
/// ```no_run
/// use lexbench::fixtures::{generate_json, SizeClass};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let doc = generate_json(SizeClass::Small, &mut rng);
/// assert!(doc.starts_with('{'));
/// ```
pub fn generate_json<R: Rng>(size: SizeClass, rng: &mut R) -> String {
    generate_json_with_shape(size.json_shape(), rng)
}

/// Generates a nested JSON document from explicit shape parameters.
pub fn generate_json_with_shape<R: Rng>(shape: JsonShape, rng: &mut R) -> String {
    let mut out = String::new();
    write_value(&mut out, shape, rng);
    out
}

fn write_value<R: Rng>(out: &mut String, shape: JsonShape, rng: &mut R) {
    if shape.depth == 0 {
        out.push_str("null");
        return;
    }

    let name: String = (0..12).map(|_| char::from(rng.sample(Alphanumeric))).collect();
    let value: f64 = rng.gen_range(0.0..10_000.0);
    let active: bool = rng.gen();

    // Writing to a String cannot fail.
    let _ = write!(
        out,
        "{{\"name\": \"{}\", \"value\": {:.3}, \"active\": {}",
        name, value, active
    );

    for i in 0..shape.arrays {
        let _ = write!(out, ", \"list_{}\": [", i);
        for j in 0..ARRAY_LEN {
            if j > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{}", rng.gen_range(0..1_000));
        }
        out.push(']');
    }

    let child = shape.child();
    for i in 0..shape.objects {
        let _ = write!(out, ", \"child_{}\": ", i);
        write_value(out, child, rng);
    }

    out.push('}');
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn count(haystack: &str, c: char) -> usize {
        haystack.chars().filter(|&x| x == c).count()
    }

    #[test]
    fn test_small_is_balanced() {
        let mut rng = StdRng::seed_from_u64(1);
        let doc = generate_json(SizeClass::Small, &mut rng);

        assert_eq!(count(&doc, '{'), count(&doc, '}'));
        assert_eq!(count(&doc, '['), count(&doc, ']'));
    }

    #[test]
    fn test_output_is_valid_json() {
        let mut rng = StdRng::seed_from_u64(2);
        for size in SizeClass::all() {
            let doc = generate_json(*size, &mut rng);
            let parsed: serde_json::Value = serde_json::from_str(&doc).unwrap();
            assert!(parsed.is_object());
        }
    }

    #[test]
    fn test_small_structure() {
        // depth 3 -> children at depth 1 with 1 array and 1 child -> null
        let mut rng = StdRng::seed_from_u64(3);
        let doc = generate_json(SizeClass::Small, &mut rng);

        assert_eq!(count(&doc, '{'), 3);
        assert_eq!(count(&doc, '['), 2 + 2);
        assert_eq!(doc.matches(": null").count(), 2);
    }

    #[test]
    fn test_structure_independent_of_seed() {
        let a = generate_json(SizeClass::Medium, &mut StdRng::seed_from_u64(10));
        let b = generate_json(SizeClass::Medium, &mut StdRng::seed_from_u64(11));

        assert_eq!(count(&a, '{'), count(&b, '{'));
        assert_eq!(count(&a, '['), count(&b, '['));
        assert_eq!(a.matches("\"child_").count(), b.matches("\"child_").count());
    }

    #[test]
    fn test_same_seed_reproduces() {
        let a = generate_json(SizeClass::Small, &mut StdRng::seed_from_u64(42));
        let b = generate_json(SizeClass::Small, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_depth_is_null() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(generate_json_with_shape(JsonShape::new(0, 4, 4), &mut rng), "null");
    }

    #[test]
    fn test_sizes_grow() {
        let mut rng = StdRng::seed_from_u64(5);
        let small = generate_json(SizeClass::Small, &mut rng);
        let medium = generate_json(SizeClass::Medium, &mut rng);
        let large = generate_json(SizeClass::Large, &mut rng);
        assert!(small.len() < medium.len());
        assert!(medium.len() < large.len());
    }
}
