use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadPan {
    pub diff: [f32; 2],
    pub new_pan: [f32; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadCenter {
    pub prev_pan: [f32; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadObjectSelect {
    pub id: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadObjectDeselect {
    pub id: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadObjectHoverEnter {
    pub id: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadObjectHoverLeave {
    pub id: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadFiltersChanged {
    pub visible: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    Pan(PayloadPan),
    Center(PayloadCenter),
    ObjectSelect(PayloadObjectSelect),
    ObjectDeselect(PayloadObjectDeselect),
    ObjectHoverEnter(PayloadObjectHoverEnter),
    ObjectHoverLeave(PayloadObjectHoverLeave),
    FiltersChanged(PayloadFiltersChanged),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_contract_pan() {
        let event = Event::Pan(PayloadPan {
            diff: [1.0, 2.0],
            new_pan: [3.0, 4.0],
        });
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"Pan":{"diff":[1.0,2.0],"new_pan":[3.0,4.0]}}"#);

        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_contract_center() {
        let event = Event::Center(PayloadCenter {
            prev_pan: [-10.0, 5.0],
        });
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"Center":{"prev_pan":[-10.0,5.0]}}"#);
    }

    #[test]
    fn test_contract_object_select() {
        let event = Event::ObjectSelect(PayloadObjectSelect { id: 4 });
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"ObjectSelect":{"id":4}}"#);

        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_contract_object_deselect() {
        let event = Event::ObjectDeselect(PayloadObjectDeselect { id: 4 });
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"ObjectDeselect":{"id":4}}"#);
    }

    #[test]
    fn test_contract_hover() {
        let enter = serde_json::to_string(&Event::ObjectHoverEnter(PayloadObjectHoverEnter {
            id: 7,
        }))
        .unwrap();
        assert_eq!(enter, r#"{"ObjectHoverEnter":{"id":7}}"#);

        let leave = serde_json::to_string(&Event::ObjectHoverLeave(PayloadObjectHoverLeave {
            id: 7,
        }))
        .unwrap();
        assert_eq!(leave, r#"{"ObjectHoverLeave":{"id":7}}"#);
    }

    #[test]
    fn test_contract_filters_changed() {
        let event = Event::FiltersChanged(PayloadFiltersChanged {
            visible: 3,
            total: 21,
        });
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"FiltersChanged":{"visible":3,"total":21}}"#);

        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
