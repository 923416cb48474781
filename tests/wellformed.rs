//! Checks that every fixture under `tests/fixtures/` is a single well-formed
//! RVN value, end to end through the skip-decoder.

use std::{fs::File, io::Read, path::Path};

use bstr::ByteSlice;
use glob::glob;
use rvn::decode::skip;

#[test]
fn fixtures_parse_to_completion() {
    let mut src = Vec::new();
    let mut fail = false;
    for path in glob("tests/fixtures/**/*.rvn").unwrap() {
        let path = path.unwrap();
        src.clear();
        File::open(&path).unwrap().read_to_end(&mut src).unwrap();
        match skip(&src) {
            Ok((_, rest)) if rest.is_empty() => {}
            Ok((_, rest)) => {
                println!("{path:?}: unconsumed trailer {:?}", rest.as_bstr());
                fail = true;
            }
            Err(err) => {
                println!("{path:?}: {err}");
                fail = true;
            }
        }
    }
    if fail {
        panic!("fail");
    }
}

#[test]
fn fixtures_directory_is_not_empty() {
    let count = glob("tests/fixtures/**/*.rvn").unwrap().count();
    assert!(count > 0, "no fixture files found under {:?}", Path::new("tests/fixtures"));
}
