//! Serde utilities for glam types.

use glam::Vec3;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serde proxy for Vec3
#[derive(Serialize, Deserialize)]
pub struct Vec3Def {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<Vec3> for Vec3Def {
    fn from(v: Vec3) -> Self {
        Self { x: v.x, y: v.y, z: v.z }
    }
}

impl From<Vec3Def> for Vec3 {
    fn from(def: Vec3Def) -> Self {
        Vec3::new(def.x, def.y, def.z)
    }
}

/// Field attribute target: `#[serde(with = "serde_utils::vec3")]`
pub mod vec3 {
    use super::*;

    pub fn serialize<S>(v: &Vec3, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Vec3Def::from(*v).serialize(s)
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Vec3, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec3Def::deserialize(d).map(Vec3::from)
    }
}

/// Field attribute target for `Vec<Vec3>` fields:
/// `#[serde(with = "serde_utils::vec3_list")]`
pub mod vec3_list {
    use super::*;

    pub fn serialize<S>(v: &[Vec3], s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.collect_seq(v.iter().map(|&p| Vec3Def::from(p)))
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Vec<Vec3>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<Vec3Def>::deserialize(d).map(|list| list.into_iter().map(Vec3::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Deserialize)]
    struct Holder {
        #[serde(with = "super::vec3")]
        v: Vec3,
        #[serde(with = "super::vec3_list")]
        list: Vec<Vec3>,
    }

    #[test]
    fn test_vec3_roundtrip() {
        let holder = Holder {
            v: Vec3::new(1.5, -2.25, 0.125),
            list: vec![Vec3::ZERO, Vec3::new(0.1, 0.2, 0.3)],
        };
        let json = serde_json::to_string(&holder).unwrap();
        let loaded: Holder = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.v, holder.v);
        assert_eq!(loaded.list, holder.list);
    }
}
