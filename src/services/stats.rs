use crate::model::building::{Machine, MachineKind, MachineStats, MachineStatus, Room};

/// Flattens rooms into one machine list, stamping each machine with the room
/// it sits in. The room name doubles as the machine's `building_name`.
pub fn flatten_rooms(rooms: &[Room]) -> Vec<Machine> {
    rooms
        .iter()
        .flat_map(|room| {
            room.machines.iter().map(move |m| Machine {
                room_name: room.room_name.clone(),
                building_id: room.building_id.clone(),
                building_name: room.room_name.clone(),
                ..m.clone()
            })
        })
        .collect()
}

pub fn compute(machines: &[Machine]) -> MachineStats {
    let mut s = MachineStats {
        total_machines: machines.len(),
        ..MachineStats::default()
    };

    for m in machines {
        match m.status {
            MachineStatus::InUse => s.total_in_use += 1,
            MachineStatus::Available => s.total_available += 1,
            _ => {}
        }
        if m.status.is_error() {
            s.total_error += 1;
        }

        let (total, in_use, available, complete, error) = match m.kind {
            MachineKind::Washer => (
                &mut s.total_washers,
                &mut s.washers_in_use,
                &mut s.washers_available,
                &mut s.washers_complete,
                &mut s.washers_error,
            ),
            MachineKind::Dryer => (
                &mut s.total_dryers,
                &mut s.dryers_in_use,
                &mut s.dryers_available,
                &mut s.dryers_complete,
                &mut s.dryers_error,
            ),
            MachineKind::Other => continue,
        };

        *total += 1;
        match m.status {
            MachineStatus::InUse => *in_use += 1,
            MachineStatus::Available => *available += 1,
            MachineStatus::Complete => *complete += 1,
            _ => *error += 1,
        }
    }

    s.washer_usage_percent = percent(s.washers_in_use, s.total_washers);
    s.dryer_usage_percent = percent(s.dryers_in_use, s.total_dryers);
    s
}

/// Keeps the upstream counters and recomputes only the complete counts,
/// which the upstream summary does not carry.
pub fn merge(upstream: MachineStats, machines: &[Machine]) -> MachineStats {
    let complete = |kind: MachineKind| {
        machines
            .iter()
            .filter(|m| m.kind == kind && m.status == MachineStatus::Complete)
            .count()
    };

    MachineStats {
        washers_complete: complete(MachineKind::Washer),
        dryers_complete: complete(MachineKind::Dryer),
        ..upstream
    }
}

pub fn format_remaining(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;

    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(id: &str, kind: MachineKind, status: &str) -> Machine {
        Machine {
            id: id.to_string(),
            kind,
            status: MachineStatus::parse(status),
            ..Machine::default()
        }
    }

    #[test]
    fn flatten_stamps_room_fields() {
        let rooms = vec![
            Room {
                room_id: "r1".into(),
                room_name: "Basement".into(),
                building_id: "b1".into(),
                machines: vec![machine("m1", MachineKind::Washer, "AVAILABLE")],
            },
            Room {
                room_id: "r2".into(),
                room_name: "Floor 3".into(),
                building_id: "b1".into(),
                machines: vec![
                    machine("m2", MachineKind::Dryer, "IN_USE"),
                    machine("m3", MachineKind::Dryer, "COMPLETE"),
                ],
            },
        ];

        let machines = flatten_rooms(&rooms);
        let ids: Vec<&str> = machines.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m1", "m2", "m3"]);
        assert_eq!(machines[0].room_name, "Basement");
        assert_eq!(machines[2].building_name, "Floor 3");
        assert_eq!(machines[2].building_id, "b1");
    }

    #[test]
    fn compute_counts_per_kind_and_status() {
        let machines = vec![
            machine("w1", MachineKind::Washer, "AVAILABLE"),
            machine("w2", MachineKind::Washer, "IN_USE"),
            machine("w3", MachineKind::Washer, "COMPLETE"),
            machine("w4", MachineKind::Washer, "OFFLINE"),
            machine("d1", MachineKind::Dryer, "IN_USE"),
            machine("d2", MachineKind::Dryer, "UNAVAILABLE"),
        ];

        let s = compute(&machines);
        assert_eq!(s.total_machines, 6);
        assert_eq!(s.total_washers, 4);
        assert_eq!(s.total_dryers, 2);
        assert_eq!(s.washers_in_use, 1);
        assert_eq!(s.dryers_in_use, 1);
        assert_eq!(s.washers_available, 1);
        assert_eq!(s.washers_complete, 1);
        assert_eq!(s.washers_error, 1);
        assert_eq!(s.dryers_error, 1);
        assert_eq!(s.total_in_use, 2);
        assert_eq!(s.total_available, 1);
        assert_eq!(s.total_error, 2);
        assert_eq!(s.washer_usage_percent, 25.0);
        assert_eq!(s.dryer_usage_percent, 50.0);
    }

    #[test]
    fn compute_on_empty_list_is_zeroed() {
        assert_eq!(compute(&[]), MachineStats::default());
    }

    #[test]
    fn merge_overrides_only_complete_counts() {
        let upstream = MachineStats {
            total_machines: 40,
            washers_in_use: 7,
            washers_complete: 99,
            ..MachineStats::default()
        };
        let machines = vec![
            machine("w1", MachineKind::Washer, "COMPLETE"),
            machine("d1", MachineKind::Dryer, "COMPLETE"),
            machine("d2", MachineKind::Dryer, "COMPLETE"),
        ];

        let s = merge(upstream, &machines);
        assert_eq!(s.total_machines, 40);
        assert_eq!(s.washers_in_use, 7);
        assert_eq!(s.washers_complete, 1);
        assert_eq!(s.dryers_complete, 2);
    }

    #[test]
    fn remaining_time_labels() {
        assert_eq!(format_remaining(0), "0m");
        assert_eq!(format_remaining(59), "0m");
        assert_eq!(format_remaining(12 * 60 + 30), "12m");
        assert_eq!(format_remaining(3600 + 5 * 60), "1h 5m");
    }
}
