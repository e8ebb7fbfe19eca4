//! DBSCAN over a handful of 2D points with their own identifiers.
//!
//! Run with `RUST_LOG=trace` to see seeding and expansion.

use clusterize::{Clusterable, Dbscan};

#[derive(Debug)]
struct Site {
    name: &'static str,
    x: f64,
    y: f64,
}

impl Clusterable for Site {
    type Id = &'static str;

    fn id(&self) -> &'static str {
        self.name
    }

    fn distance(&self, other: &Self) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

fn site(name: &'static str, x: f64, y: f64) -> Site {
    Site { name, x, y }
}

fn main() {
    env_logger::init();

    // Three well-separated groups in 2D, plus a stray.
    let data = vec![
        // Group A (near origin)
        site("a1", 0.0, 0.0),
        site("a2", 0.1, 0.2),
        site("a3", 0.2, 0.1),
        site("a4", -0.1, 0.1),
        // Group B (near (5, 5))
        site("b1", 5.0, 5.0),
        site("b2", 5.1, 4.9),
        site("b3", 4.9, 5.1),
        site("b4", 5.2, 5.2),
        // Group C (near (10, 0))
        site("c1", 10.0, 0.0),
        site("c2", 10.1, 0.1),
        site("c3", 9.9, -0.1),
        site("c4", 10.2, 0.2),
        // Stray
        site("z", 20.0, 20.0),
    ];

    let dbscan = Dbscan::new(1.0, 2);
    let fit = match dbscan.fit(&data) {
        Ok(fit) => fit,
        Err(err) => {
            eprintln!("clustering failed: {err}");
            std::process::exit(1);
        }
    };

    println!("=== DBSCAN (eps=1.0, min_pts=2) ===");
    for (i, label) in fit.labels().iter().enumerate() {
        let tag = match label {
            Some(k) => format!("cluster {k}"),
            None => "NOISE".to_string(),
        };
        let s = &data[i];
        println!("  {:>3} ({:5.1}, {:5.1}) => {}", s.name, s.x, s.y, tag);
    }

    for (k, cluster) in fit.clusters().iter().enumerate() {
        println!("cluster {k}: {:?}", cluster.ids());
    }
}
