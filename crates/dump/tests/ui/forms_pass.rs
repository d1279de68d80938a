//! Every accepted form of dump! compiles.

use dump::dump;

fn main() {
    let (a, b, c, d, e, f, g, h) = (1, 2, 3, 4, 5, 6, 7, 8);

    let _ = dump!();
    let _ = dump!(a);
    let _ = dump!(a,);
    let _ = dump!(a, b, c, d, e, f, g, h);
    let _ = dump!(a, b, c, d, e, f, g, h,);

    let pairs = vec![(1, "one")];
    for (n, s) in &pairs {
        let _ = dump!(ref (n, s); n, s, a);
        let _ = dump!(ref (n, s,); *n + 1, s.len(),);
    }

    // A dump can be stored and rendered later.
    let ctx = dump!(a, b).sep_kv("; ", ": ").with_names(["first", "second"]);
    assert_eq!(ctx.to_string(), "{first: 1; second: 2}");
}
