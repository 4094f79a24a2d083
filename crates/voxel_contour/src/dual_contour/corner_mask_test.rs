use super::*;

#[test]
fn test_all_negative() {
  let samples = [-1.0, -2.0, -3.0, -4.0, -5.0, -6.0, -7.0, -8.0];
  assert_eq!(build(&samples), 0b0000_0000);
  assert!(!has_vertex(build(&samples)));
}

#[test]
fn test_all_positive() {
  let samples = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
  assert_eq!(build(&samples), 0b1111_1111);
  assert!(!has_vertex(build(&samples)));
}

#[test]
fn test_zero_sets_bit() {
  let mut samples = [-1.0; 8];
  samples[3] = 0.0;
  assert_eq!(build(&samples), 0b0000_1000);
  assert!(has_vertex(build(&samples)));
}

#[test]
fn test_checkerboard() {
  let samples = [1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0];
  assert_eq!(build(&samples), 0b0101_0101);
}

#[test]
fn test_each_bit_maps_to_its_corner() {
  for corner in 0..8 {
    let mut samples = [-1.0; 8];
    samples[corner] = 1.0;
    assert_eq!(build(&samples), 1 << corner);
  }
}
