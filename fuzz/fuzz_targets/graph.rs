#![no_main]

use libfuzzer_sys::fuzz_target;
use depcycle::Graph;

// Each input chunk is one insertion: [key, n, dep_1 .. dep_n], names drawn from
// a 32-name space so that re-insertions and cycles are common.
fuzz_target!(|data: &[u8]| {
    let mut graph = Graph::new();
    let mut rest = data;

    while let Some((&key, tail)) = rest.split_first() {
        let Some((&n, tail)) = tail.split_first() else {
            break;
        };
        let n = usize::from(n % 8).min(tail.len());
        let deps: Vec<String> = tail[..n].iter().map(|d| format!("v{}", d % 32)).collect();
        rest = &tail[n..];

        let _ = graph.add_and_verify(&format!("v{}", key % 32), deps);
    }

    let sccs = graph.strongly_connected_components();
    assert_eq!(sccs.iter().map(Vec::len).sum::<usize>(), graph.len());

    for name in graph.names() {
        let descendants = graph.descendants(name).unwrap();
        assert!(!descendants.contains(&name));
    }

    let _ = graph.to_dot();
});
