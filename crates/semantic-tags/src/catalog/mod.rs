//! The built-in tag catalog.
//!
//! A plain data table of Locations, Equipment, Points and Properties. Each
//! row is `(id, label, English synonyms)`; synonyms are comma separated.
//!
//! Note that `Equipment_Sensor` and `Point_Sensor` share the suffix
//! `Sensor`. Points register after Equipment, so a bare `Sensor` tag
//! resolves to `Point_Sensor`.

use lazy_static::lazy_static;

use crate::model::{Category, TagDefinition};

/// Locale used for the synonyms in the built-in table.
pub const DEFAULT_LOCALE: &str = "en";

type Row = (&'static str, &'static str, &'static str);

const LOCATIONS: &[Row] = &[
    ("Location_Building", "Building", "Buildings"),
    ("Location_Building_Garage", "Garage", "Garages"),
    ("Location_Building_House", "House", "Houses"),
    ("Location_Building_Shed", "Shed", "Sheds"),
    ("Location_Floor", "Floor", "Floors,Storey"),
    ("Location_Floor_Attic", "Attic", "Attics,Loft"),
    ("Location_Floor_Basement", "Basement", "Basements,Cellar"),
    ("Location_Floor_FirstFloor", "First Floor", "Upstairs"),
    ("Location_Floor_GroundFloor", "Ground Floor", "Downstairs"),
    ("Location_Room", "Room", "Rooms"),
    ("Location_Room_Bathroom", "Bathroom", "Bathrooms,Bath,Restroom"),
    ("Location_Room_Bedroom", "Bedroom", "Bedrooms,Sleeping Room"),
    ("Location_Room_BoilerRoom", "Boiler Room", "Boiler Rooms"),
    ("Location_Room_Corridor", "Corridor", "Corridors,Hallway,Hall"),
    ("Location_Room_DiningRoom", "Dining Room", "Dining Rooms"),
    ("Location_Room_Kitchen", "Kitchen", "Kitchens"),
    ("Location_Room_LivingRoom", "Living Room", "Living Rooms,Lounge"),
    ("Location_Room_Office", "Office", "Offices,Study"),
    ("Location_Room_Staircase", "Staircase", "Staircases,Stairs"),
    ("Location_Outdoor", "Outdoor", "Outside"),
    ("Location_Outdoor_Carport", "Carport", "Carports"),
    ("Location_Outdoor_Driveway", "Driveway", "Driveways"),
    ("Location_Outdoor_Garden", "Garden", "Gardens,Yard"),
    ("Location_Outdoor_Patio", "Patio", "Patios"),
    ("Location_Outdoor_Terrace", "Terrace", "Terraces,Deck"),
];

const EQUIPMENT: &[Row] = &[
    ("Equipment_Battery", "Battery", "Batteries"),
    ("Equipment_Blinds", "Blinds", "Rollershutter,Shutter"),
    ("Equipment_Camera", "Camera", "Cameras"),
    ("Equipment_Car", "Car", "Cars,Vehicle"),
    ("Equipment_CleaningRobot", "Cleaning Robot", "Vacuum Robot"),
    ("Equipment_Door", "Door", "Doors"),
    ("Equipment_Door_FrontDoor", "Front Door", "Front Doors,Frontdoor"),
    ("Equipment_Door_GarageDoor", "Garage Door", "Garage Doors"),
    ("Equipment_HVAC", "HVAC", "Heating,Ventilation,Air Conditioning"),
    ("Equipment_Inverter", "Inverter", "Inverters"),
    ("Equipment_LawnMower", "Lawn Mower", "Lawn Mowers"),
    ("Equipment_Lightbulb", "Lightbulb", "Lightbulbs,Bulb,Lamp"),
    ("Equipment_Lock", "Lock", "Locks"),
    ("Equipment_NetworkAppliance", "Network Appliance", "Router,Switch"),
    ("Equipment_PowerOutlet", "Power Outlet", "Outlet,Socket"),
    ("Equipment_Pump", "Pump", "Pumps"),
    ("Equipment_RadiatorControl", "Radiator Control", "Thermostat,Radiator"),
    ("Equipment_Receiver", "Receiver", "Receivers,Audio Receiver"),
    ("Equipment_RemoteControl", "Remote Control", "Remote"),
    ("Equipment_Screen", "Screen", "Screens"),
    ("Equipment_Screen_Television", "Television", "TV,Televisions"),
    ("Equipment_Sensor", "Sensor", "Sensors"),
    ("Equipment_Sensor_MotionDetector", "Motion Detector", "Motion Sensor"),
    ("Equipment_Sensor_SmokeDetector", "Smoke Detector", "Smoke Alarm"),
    ("Equipment_Siren", "Siren", "Sirens"),
    ("Equipment_Speaker", "Speaker", "Speakers,Loudspeaker"),
    ("Equipment_Valve", "Valve", "Valves"),
    ("Equipment_WallSwitch", "Wall Switch", "Wall Switches"),
    ("Equipment_WebService", "Web Service", "Web Services"),
    ("Equipment_WebService_WeatherService", "Weather Service", "Weather"),
    ("Equipment_WhiteGood", "White Good", "Appliance"),
    ("Equipment_WhiteGood_Dishwasher", "Dishwasher", "Dishwashers"),
    ("Equipment_WhiteGood_Dryer", "Dryer", "Dryers,Tumble Dryer"),
    ("Equipment_WhiteGood_Freezer", "Freezer", "Freezers"),
    ("Equipment_WhiteGood_Oven", "Oven", "Ovens"),
    ("Equipment_WhiteGood_Refrigerator", "Refrigerator", "Fridge,Refrigerators"),
    ("Equipment_WhiteGood_WashingMachine", "Washing Machine", "Washer"),
    ("Equipment_Window", "Window", "Windows"),
];

const POINTS: &[Row] = &[
    ("Point_Alarm", "Alarm", "Alarms"),
    ("Point_Command", "Command", "Commands,Control"),
    ("Point_Command_Switch", "Switch", "Switches"),
    ("Point_Sensor", "Sensor", "Sensors,Measurement"),
    ("Point_Sensor_BinarySensor", "Binary Sensor", "Contact"),
    ("Point_Sensor_LowBattery", "Low Battery", "Battery Low"),
    ("Point_Sensor_OpenState", "Open State", "Open Contact"),
    ("Point_Sensor_Tampered", "Tampered", "Tamper"),
    ("Point_Setpoint", "Setpoint", "Target,Target Value"),
    ("Point_Status", "Status", "State"),
];

const PROPERTIES: &[Row] = &[
    ("Property_CO", "CO", "Carbon Monoxide"),
    ("Property_CO2", "CO2", "Carbon Dioxide"),
    ("Property_ColorTemperature", "Color Temperature", "Colour Temperature"),
    ("Property_Current", "Current", "Electric Current"),
    ("Property_Duration", "Duration", "Runtime"),
    ("Property_Energy", "Energy", "Consumption"),
    ("Property_Frequency", "Frequency", "Frequencies"),
    ("Property_Gas", "Gas", "Gas Consumption"),
    ("Property_Humidity", "Humidity", "Moisture"),
    ("Property_Level", "Level", "Fill Level"),
    ("Property_Light", "Light", "Lights,Lighting"),
    ("Property_Noise", "Noise", "Loudness"),
    ("Property_Oil", "Oil", "Oil Level"),
    ("Property_Opening", "Opening", "Aperture"),
    ("Property_Power", "Power", "Wattage"),
    ("Property_Presence", "Presence", "Occupancy,Motion"),
    ("Property_Pressure", "Pressure", "Air Pressure"),
    ("Property_Rain", "Rain", "Rainfall,Precipitation"),
    ("Property_Smoke", "Smoke", "Smoke Density"),
    ("Property_SoundVolume", "Sound Volume", "Volume"),
    ("Property_Temperature", "Temperature", "Temperatures,Heat"),
    ("Property_Timestamp", "Timestamp", "Time"),
    ("Property_Ultraviolet", "Ultraviolet", "UV,UV Index"),
    ("Property_Vibration", "Vibration", "Vibrations"),
    ("Property_Voltage", "Voltage", "Volt"),
    ("Property_Water", "Water", "Water Consumption"),
    ("Property_Wind", "Wind", "Wind Speed"),
];

lazy_static! {
    static ref DEFAULT_CATALOG: Vec<TagDefinition> = {
        let tables = [
            (Category::Location, LOCATIONS),
            (Category::Equipment, EQUIPMENT),
            (Category::Point, POINTS),
            (Category::Property, PROPERTIES),
        ];
        tables
            .iter()
            .flat_map(|(category, rows)| rows.iter().map(move |row| definition(*category, row)))
            .collect()
    };
}

fn definition(category: Category, &(id, label, synonyms): &Row) -> TagDefinition {
    TagDefinition::new(id, category, label)
        .with_synonyms(DEFAULT_LOCALE, synonyms.split(',').map(str::trim))
}

/// Returns the built-in catalog.
pub fn default_catalog() -> &'static [TagDefinition] {
    &DEFAULT_CATALOG
}
