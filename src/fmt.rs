pub struct PlotFmt;

impl PlotFmt {
    pub fn workload_title(workload: &str) -> String {
        match workload {
            "a" => "50% updates, 50% reads".to_string(),
            "b" => "95% reads, 5% updates".to_string(),
            "g" => "95% updates, 5% reads".to_string(),
            "h" => "95% updates, high contention".to_string(),
            name => format!("Workload {}", name.to_uppercase()),
        }
    }

    pub fn problem_level_label(problem_level: usize) -> String {
        match problem_level {
            0 => "no faults".to_string(),
            1 => "1 fault".to_string(),
            n => format!("{} faults", n),
        }
    }

    pub fn protocol_color(protocol: &str) -> &'static str {
        match protocol {
            "paxos" => "#1f77b4",
            "raft" => "#ff7f0e",
            "accord" => "#2ca02c",
            name => {
                panic!("PlotFmt::protocol_color: protocol {} not supported!", name);
            }
        }
    }

    pub fn problem_level_color(problem_level: usize) -> &'static str {
        match problem_level {
            0 => "#4c72b0",
            1 => "#dd8452",
            2 => "#55a868",
            level => panic!(
                "PlotFmt::problem_level_color: problem level {} not supported!",
                level
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_workloads() {
        assert_eq!(PlotFmt::workload_title("a"), "50% updates, 50% reads");
        assert_eq!(PlotFmt::workload_title("z"), "Workload Z");
    }

    #[test]
    fn problem_level_labels() {
        assert_eq!(PlotFmt::problem_level_label(0), "no faults");
        assert_eq!(PlotFmt::problem_level_label(1), "1 fault");
        assert_eq!(PlotFmt::problem_level_label(2), "2 faults");
    }
}
