//! Vehicle identity, position, motion and pit accessors.

use super::Reader;
use crate::convert;
use crate::raw::RawValue;
use crate::resolve::VehicleQuery;

/// Vehicle identity and motion state.
#[derive(Clone)]
pub struct Vehicle {
    reader: Reader,
}

impl Vehicle {
    pub(crate) fn new(reader: Reader) -> Self {
        Self { reader }
    }

    /// Driver names in raw producer slot order.
    ///
    /// Sized to `max(vehicle_count, 1)` so index-to-name lookups always find
    /// at least one (empty) entry. This is slot order, not race order.
    pub fn driver_list(&self) -> Vec<String> {
        let count = self.reader.telemetry().vehicle_count().max(1);
        (0..count)
            .map(|slot| self.reader.scor_text(VehicleQuery::Slot(slot), |v| v.driver_name.as_slice()))
            .collect()
    }

    /// Is this the local player's vehicle.
    pub fn is_player(&self, veh: VehicleQuery) -> bool {
        self.reader.scor(veh, |v| v.is_player) != 0
    }

    /// The local player's scoring slot, -1 when no slot is flagged.
    pub fn player_index(&self) -> i64 {
        self.reader.resolver().local_player_slot().map_or(-1, |slot| slot as i64)
    }

    /// The telemetry slot synchronized to a scoring request, -1 when the
    /// vehicle has no telemetry slot.
    pub fn sync_index(&self, veh: VehicleQuery) -> i64 {
        self.reader.resolver().resolve(veh).telemetry_slot.map_or(-1, |slot| slot as i64)
    }

    /// Stable vehicle identifier shared across both regions.
    pub fn slot_id(&self, veh: VehicleQuery) -> i64 {
        self.reader.scor(veh, |v| v.id)
    }

    /// Driver name.
    pub fn driver_name(&self, veh: VehicleQuery) -> String {
        self.reader.scor_text(veh, |v| v.driver_name.as_slice())
    }

    /// Vehicle name.
    pub fn vehicle_name(&self, veh: VehicleQuery) -> String {
        self.reader.scor_text(veh, |v| v.vehicle_name.as_slice())
    }

    /// Vehicle class name.
    pub fn class_name(&self, veh: VehicleQuery) -> String {
        self.reader.scor_text(veh, |v| v.vehicle_class.as_slice())
    }

    /// Total vehicles in the session.
    pub fn total(&self) -> i64 {
        self.reader.telemetry().vehicle_count() as i64
    }

    /// Overall classification place, 1-based.
    pub fn place(&self, veh: VehicleQuery) -> i64 {
        self.reader.scor(veh, |v| v.place)
    }

    /// Completed pit stops.
    pub fn number_pitstops(&self, veh: VehicleQuery) -> i64 {
        self.reader.scor(veh, |v| v.num_pitstops)
    }

    /// Pit request state (0 none, 1 request, 2 entering, 3 stopped,
    /// 4 exiting).
    pub fn pit_state(&self, veh: VehicleQuery) -> i64 {
        self.reader.scor(veh, |v| v.pit_state)
    }

    /// Remaining fuel, litres.
    pub fn fuel(&self, veh: VehicleQuery) -> f64 {
        self.reader.tele(veh, |v| v.fuel)
    }

    /// Fuel tank capacity, litres.
    pub fn tank_capacity(&self, veh: VehicleQuery) -> f64 {
        self.reader.tele(veh, |v| v.fuel_capacity)
    }

    /// Heading components (x, z) of the orientation matrix's forward row.
    pub fn orientation_yaw(&self, veh: VehicleQuery) -> (f64, f64) {
        (self.reader.tele(veh, |v| v.ori[2].x), self.reader.tele(veh, |v| v.ori[2].z))
    }

    /// Raw world X position, producer convention.
    pub fn pos_x(&self, veh: VehicleQuery) -> f64 {
        self.reader.tele(veh, |v| v.pos.x)
    }

    /// Raw world Y position, producer convention.
    pub fn pos_y(&self, veh: VehicleQuery) -> f64 {
        self.reader.tele(veh, |v| v.pos.y)
    }

    /// Raw world Z position, producer convention.
    pub fn pos_z(&self, veh: VehicleQuery) -> f64 {
        self.reader.tele(veh, |v| v.pos.z)
    }

    /// Raw world position triple, producer convention.
    pub fn pos_xyz(&self, veh: VehicleQuery) -> (f64, f64, f64) {
        (self.pos_x(veh), self.pos_y(veh), self.pos_z(veh))
    }

    /// Longitudinal world-plane position, forward/left/up convention.
    pub fn pos_longitudinal(&self, veh: VehicleQuery) -> f64 {
        let (longitudinal, _, _) = self.world_axes(veh);
        longitudinal
    }

    /// Lateral world-plane position, forward/left/up convention.
    pub fn pos_lateral(&self, veh: VehicleQuery) -> f64 {
        let (_, lateral, _) = self.world_axes(veh);
        lateral
    }

    /// Vertical world-plane position, forward/left/up convention.
    pub fn pos_vertical(&self, veh: VehicleQuery) -> f64 {
        let (_, _, vertical) = self.world_axes(veh);
        vertical
    }

    /// Lateral acceleration in the vehicle-local frame, m/s^2.
    pub fn accel_lateral(&self, veh: VehicleQuery) -> f64 {
        self.reader.tele(veh, |v| v.local_accel.x)
    }

    /// Longitudinal acceleration in the vehicle-local frame, m/s^2.
    pub fn accel_longitudinal(&self, veh: VehicleQuery) -> f64 {
        self.reader.tele(veh, |v| v.local_accel.z)
    }

    /// Vertical acceleration in the vehicle-local frame, m/s^2.
    pub fn accel_vertical(&self, veh: VehicleQuery) -> f64 {
        self.reader.tele(veh, |v| v.local_accel.y)
    }

    /// Scalar speed, m/s.
    pub fn speed(&self, veh: VehicleQuery) -> f64 {
        convert::velocity_to_speed(
            self.reader.tele(veh, |v| v.local_vel.x),
            self.reader.tele(veh, |v| v.local_vel.y),
            self.reader.tele(veh, |v| v.local_vel.z),
        )
    }

    /// Front downforce, Newtons.
    pub fn downforce_front(&self, veh: VehicleQuery) -> f64 {
        self.reader.tele(veh, |v| v.front_downforce)
    }

    /// Rear downforce, Newtons.
    pub fn downforce_rear(&self, veh: VehicleQuery) -> f64 {
        self.reader.tele(veh, |v| v.rear_downforce)
    }

    fn world_axes(&self, veh: VehicleQuery) -> (f64, f64, f64) {
        match self.reader.tele_veh(veh) {
            Some(v) => {
                let pos = crate::pages::Vec3 {
                    x: v.pos.x.sample().unwrap_or_default(),
                    y: v.pos.y.sample().unwrap_or_default(),
                    z: v.pos.z.sample().unwrap_or_default(),
                };
                convert::world_position_axes(pos)
            }
            None => (0.0, 0.0, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{dataset, empty_snapshot, populated_snapshot};

    const PLAYER: VehicleQuery = VehicleQuery::LocalPlayer;

    #[test]
    fn driver_list_follows_raw_slot_order() {
        let data = dataset(populated_snapshot());
        assert_eq!(data.vehicle.driver_list(), vec!["A. Verde", "B. Rossi", "C. Blanc"]);
    }

    #[test]
    fn driver_list_has_one_empty_entry_when_no_vehicles() {
        let data = dataset(empty_snapshot());
        assert_eq!(data.vehicle.driver_list(), vec![String::new()]);
    }

    #[test]
    fn player_index_reports_the_flagged_slot() {
        let data = dataset(populated_snapshot());
        assert_eq!(data.vehicle.player_index(), 1);
        assert!(data.vehicle.is_player(PLAYER));
        assert!(!data.vehicle.is_player(VehicleQuery::Slot(0)));
    }

    #[test]
    fn player_index_is_negative_when_nobody_is_flagged() {
        let data = dataset(empty_snapshot());
        assert_eq!(data.vehicle.player_index(), -1);
        assert_eq!(data.vehicle.sync_index(PLAYER), -1);
    }

    #[test]
    fn sync_index_pairs_scoring_and_telemetry_slots() {
        let data = dataset(populated_snapshot());
        // Player sits at scoring slot 1 but telemetry slot 0 (id match).
        assert_eq!(data.vehicle.sync_index(PLAYER), 0);
        assert_eq!(data.vehicle.sync_index(VehicleQuery::Slot(0)), 2);
    }

    #[test]
    fn speed_is_the_velocity_norm() {
        let mut snapshot = populated_snapshot();
        snapshot.telemetry.vehicles[0].local_vel = crate::pages::Vec3 { x: 3.0, y: 0.0, z: 4.0 };
        let data = dataset(snapshot);

        assert!((data.vehicle.speed(PLAYER) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn world_plane_axes_are_remapped() {
        let mut snapshot = populated_snapshot();
        snapshot.telemetry.vehicles[0].pos = crate::pages::Vec3 { x: 10.0, y: 2.0, z: 7.0 };
        let data = dataset(snapshot);

        assert_eq!(data.vehicle.pos_longitudinal(PLAYER), 10.0);
        assert_eq!(data.vehicle.pos_lateral(PLAYER), -7.0);
        assert_eq!(data.vehicle.pos_vertical(PLAYER), 2.0);
        // Raw access stays in the producer convention.
        assert_eq!(data.vehicle.pos_xyz(PLAYER), (10.0, 2.0, 7.0));
    }

    #[test]
    fn identity_reads_decode_name_buffers() {
        let data = dataset(populated_snapshot());
        assert_eq!(data.vehicle.driver_name(PLAYER), "B. Rossi");
        assert_eq!(data.vehicle.class_name(PLAYER), "GT3");
        assert_eq!(data.vehicle.slot_id(PLAYER), 10);
        assert_eq!(data.vehicle.total(), 3);
    }
}
