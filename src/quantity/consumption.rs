quantity!(KilowattHoursPer100Kilometres, "kWh/100km");
